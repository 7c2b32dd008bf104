//! 1 回のバッチ実行に必要な設定一式

use crate::domain::{ColumnName, RetryPolicy};
use common::domain::ModelName;
use common::llm::ProviderType;
use std::path::PathBuf;

/// バッチ実行の解決済み設定
///
/// 起動時に CLI 引数と環境変数から一度だけ解決し、以後はこの値のみを参照する。
/// プロセス全体で共有する可変設定は持たない。
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// 入力 CSV のパス
    pub input: PathBuf,
    /// 結果 CSV のパス
    pub output: PathBuf,
    /// 入力 CSV 内のプロンプト列名
    pub column: ColumnName,
    pub provider_type: ProviderType,
    pub model: ModelName,
    /// None のときプロバイダのデフォルト URL
    pub base_url: Option<String>,
    /// 起動時に環境変数から読み取った API キー（echo では None）
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
    pub retry: RetryPolicy,
    /// JSONL ログの出力先（None のときログ無効）
    pub log_file: Option<PathBuf>,
    /// 進捗バーと情報メッセージを抑制する
    pub quiet: bool,
}
