//! リトライポリシーのドメイン型（回数と待ち時間）

use std::time::Duration;

/// デフォルトの最大試行回数（最初の 1 回を含む）
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// デフォルトのリトライ待ち秒数
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 2;

/// 補完リクエストのリトライポリシー
///
/// 試行回数は全体の上限。バックオフやジッターは行わず、試行の間に
/// 毎回固定の待ち時間を挟む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// 新しいポリシーを作成する。`max_retries` が 0 のときは 1 に丸める
    pub fn new(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_attempts: max_retries.max(1),
            delay: Duration::from_secs(delay_secs),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS)
    }
}
