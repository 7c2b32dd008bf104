//! ユースケース（バッチ実行の中核ロジック）

pub(crate) mod batch_run;
pub(crate) mod retry;

pub(crate) use batch_run::{BatchOutcome, BatchRunner};
pub(crate) use retry::RetryingCompletion;
