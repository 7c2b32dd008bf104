//! CSV 入力テーブルからプロンプト列を読み出すアダプタ

use crate::domain::{ColumnName, Prompt};
use crate::ports::outbound::PromptSource;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

/// CSV ファイルの指定列をプロンプト列として取り出す PromptSource 実装
///
/// - ヘッダ名は前後の空白を落としてから解決する（先頭の UTF-8 BOM も除去）
/// - 全フィールドが空白だけの行は読み飛ばす
/// - 列が見つからない場合は利用可能な列名を列挙して usage エラー
pub struct CsvPromptSource {
    fs: Arc<dyn FileSystem>,
}

impl CsvPromptSource {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl PromptSource for CsvPromptSource {
    fn load(&self, path: &Path, column: &ColumnName) -> Result<Vec<Prompt>, Error> {
        let contents = self.fs.read_to_string(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(contents.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| Error::io_msg(format!("Failed to parse '{}': {}", path.display(), e)))?;
        let names: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
                h.trim().to_string()
            })
            .collect();

        let col_index = names
            .iter()
            .position(|name| name == column.as_ref())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Column '{}' not found. Available columns: {:?}",
                    column, names
                ))
            })?;

        let mut prompts = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                Error::io_msg(format!("Failed to parse '{}': {}", path.display(), e))
            })?;
            // 入力整形の都合で混ざる空行は件数に入れない
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            // 行が短い場合は空プロンプトとして扱う
            let field = record.get(col_index).unwrap_or("");
            prompts.push(Prompt::new(field));
        }
        Ok(prompts)
    }
}
