//! aibatch コマンドの enum（Command Pattern）
//!
//! ヘルプ表示 vs バッチ実行の分岐を enum で明示する。

use crate::domain::RunConfig;

/// aibatch の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum BatchCommand {
    /// ヘルプ表示
    Help,
    /// バッチ実行（検証・解決済みの設定を持つ）
    Run(RunConfig),
}
