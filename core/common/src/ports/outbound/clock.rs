//! 時刻 Outbound ポート
//!
//! 結果行に刻むタイムスタンプの取得を抽象化する（テストでは固定時刻に差し替える）。

/// 結果行のタイムスタンプ形式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 時刻抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdClock` やテスト用の固定 Clock など。
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻を `TIMESTAMP_FORMAT` 形式の文字列で返す
    fn timestamp(&self) -> String;
}
