//! LLM補完ドライバーとプロバイダの実装
//!
//! このモジュールは、異なるLLMプロバイダ（OpenAI互換、Echoなど）で共通する
//! 単発補完の処理を提供します。ストリーミング・会話履歴は扱いません。

pub mod driver;
pub mod provider;
pub mod openai_compat;
pub mod echo;
pub mod factory;

pub use driver::CompletionDriver;
pub use provider::CompletionProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use echo::EchoProvider;
pub use factory::{create_provider, AnyProvider, ProviderType};
