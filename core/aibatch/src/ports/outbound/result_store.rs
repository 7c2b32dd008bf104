//! 結果テーブルの Outbound ポート
//!
//! 追記専用の永続テーブル。既存のデータ行数がそのまま再開オフセットになる。

use crate::domain::ResultRow;
use common::error::Error;
use std::path::Path;

/// 結果テーブル（チェックポイント）の読み書き
///
/// 行は index 1 から隙間なく追記される前提で、initialize の返す行数を
/// 「処理済み件数」として扱う。途中の行の書き損じは以後の再開位置をずらす。
pub trait ResultStore: Send + Sync {
    /// テーブルが存在するか
    fn exists(&self, path: &Path) -> bool;

    /// 無ければヘッダ付きで作成して 0 を返す。あればデータ行数を返す。
    /// 既存ファイルが読めない・解析できない場合は 0（先頭からやり直し）。
    fn initialize(&self, path: &Path) -> Result<u64, Error>;

    /// 1 行を末尾に追記する
    fn append(&self, path: &Path, row: &ResultRow) -> Result<(), Error>;
}
