//! Outbound ポート: アプリが外界（補完サービス・入出力テーブル・コンソール）を使うための trait

pub mod completion;
pub mod prompt_source;
pub mod reporter;
pub mod result_store;

pub use completion::Completion;
pub use prompt_source::PromptSource;
pub use reporter::Reporter;
pub use result_store::ResultStore;
