//! aibatch 固有のドメイン型（型と不変条件）

pub mod column_name;
pub mod command;
pub mod prompt;
pub mod result_row;
pub mod retry_policy;
pub mod run_config;
pub use column_name::ColumnName;
pub use command::BatchCommand;
pub use prompt::Prompt;
pub use result_row::ResultRow;
pub use retry_policy::{RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
pub use run_config::RunConfig;
