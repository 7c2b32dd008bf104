//! 入力テーブル読み込みの Outbound ポート

use crate::domain::{ColumnName, Prompt};
use common::error::Error;
use std::path::Path;

/// 入力テーブルからプロンプト列を読み出す
///
/// 実装は `adapter::CsvPromptSource` など。返す列の順序は入力の行順を
/// 保持する（位置がそのまま再開オフセットの前提になる）。
pub trait PromptSource: Send + Sync {
    fn load(&self, path: &Path, column: &ColumnName) -> Result<Vec<Prompt>, Error>;
}
