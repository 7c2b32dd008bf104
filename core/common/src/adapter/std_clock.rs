//! 標準時刻実装（chrono::Local を委譲）

use crate::ports::outbound::{Clock, TIMESTAMP_FORMAT};

/// ローカル時刻を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn timestamp(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
