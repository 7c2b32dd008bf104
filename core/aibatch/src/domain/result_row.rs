//! 結果テーブルの 1 行のドメイン型

/// 処理済みプロンプト 1 件の記録
///
/// `index` は入力プロンプト列での 1 始まりの位置。`response` は成功時の
/// 応答テキスト、またはリトライを使い切った場合の `ERROR: ...` 形式の失敗記録。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub index: u64,
    pub prompt: String,
    pub response: String,
    pub timestamp: String,
}
