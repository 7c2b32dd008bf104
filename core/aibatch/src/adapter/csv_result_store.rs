//! CSV 結果テーブルのアダプタ（ヘッダ作成・行数カウント・1 行追記）

use crate::domain::ResultRow;
use crate::ports::outbound::ResultStore;
use common::domain::ModelName;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

/// 結果を CSV ファイルへ追記する ResultStore 実装
///
/// ヘッダは `Index, Original Prompt, <モデル名>, Timestamp` の 4 列。
/// 追記は呼び出しごとにファイルを開き直して 1 行書いて閉じるため、
/// プロセスが途中で落ちても追記済みの行はそのまま残る。
pub struct CsvResultStore {
    fs: Arc<dyn FileSystem>,
    model: ModelName,
}

impl CsvResultStore {
    pub fn new(fs: Arc<dyn FileSystem>, model: ModelName) -> Self {
        Self { fs, model }
    }

    fn header_line(&self) -> Result<String, Error> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["Index", "Original Prompt", self.model.as_ref(), "Timestamp"])
            .map_err(|e| Error::io_msg(format!("Failed to build header: {}", e)))?;
        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::io_msg(format!("Failed to build header: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| Error::io_msg(format!("Failed to build header: {}", e)))
    }

    /// 既存ファイルのデータ行数を数える。読めない・壊れている場合は None
    fn count_rows(&self, path: &Path) -> Option<u64> {
        let contents = self.fs.read_to_string(path).ok()?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut count = 0u64;
        for record in reader.records() {
            match record {
                Ok(_) => count += 1,
                Err(_) => return None,
            }
        }
        Some(count)
    }
}

impl ResultStore for CsvResultStore {
    fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    fn initialize(&self, path: &Path) -> Result<u64, Error> {
        if !self.exists(path) {
            let header = self.header_line()?;
            self.fs.write(path, &header)?;
            return Ok(0);
        }
        // 壊れた既存ファイルは行数 0 として扱い、先頭から処理し直す
        Ok(self.count_rows(path).unwrap_or(0))
    }

    fn append(&self, path: &Path, row: &ResultRow) -> Result<(), Error> {
        let w = self.fs.open_append(path)?;
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record([
            row.index.to_string().as_str(),
            row.prompt.as_str(),
            row.response.as_str(),
            row.timestamp.as_str(),
        ])
        .map_err(|e| Error::io_msg(format!("Failed to append to '{}': {}", path.display(), e)))?;
        wtr.flush()
            .map_err(|e| Error::io_msg(format!("Failed to append to '{}': {}", path.display(), e)))?;
        Ok(())
    }
}
