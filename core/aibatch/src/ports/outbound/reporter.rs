//! コンソール報告の Outbound ポート
//!
//! 進捗バーと人間向けメッセージ。結果テーブルや JSONL ログの
//! データ契約には含まれない観測用チャネル。

use anyhow::Result;

/// 操作者向けの報告
///
/// 実装は `adapter::ConsoleReporter` やテスト用の収集 Reporter など。
pub trait Reporter: Send + Sync {
    /// 通常メッセージ（quiet 時は抑制される）
    fn info(&self, message: &str) -> Result<()>;

    /// 警告メッセージ（`[Warning] ` 前置）
    fn warn(&self, message: &str) -> Result<()>;

    /// エラー報告（`[Error] ` 前置）。報告のみで実行は継続する
    fn error(&self, message: &str) -> Result<()>;

    /// 進捗バーを開始する（done: 処理済み件数、total: 全件数）
    fn progress_start(&self, done: u64, total: u64);

    /// 進捗を 1 件進める
    fn progress_inc(&self);

    /// 進捗バーを完了する
    fn progress_finish(&self);
}
