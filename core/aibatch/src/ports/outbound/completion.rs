//! 単発補完の Outbound ポート
//!
//! ストリーミングではなく 1 回のプロンプトで全文応答を取得する（補完サービスとの境界）。

use common::error::Error;

/// 単発の補完（プロンプト 1 件 → 応答テキスト 1 件）
pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}
