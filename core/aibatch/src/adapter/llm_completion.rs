//! 単発補完の標準実装（CompletionDriver を Completion ポートへ接続）

use common::error::Error;
use common::llm::{AnyProvider, CompletionDriver};

use crate::ports::outbound::Completion;

/// バッチ内の全プロンプトに付与する固定のシステム指示
const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// 標準の単発補完アダプタ
pub struct DriverCompletion {
    driver: CompletionDriver<AnyProvider>,
}

impl DriverCompletion {
    pub fn new(driver: CompletionDriver<AnyProvider>) -> Self {
        Self { driver }
    }
}

impl Completion for DriverCompletion {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        self.driver.complete(prompt, Some(SYSTEM_INSTRUCTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::llm::{create_provider, ProviderType};

    #[test]
    fn test_driver_completion_with_echo() {
        let provider = create_provider(ProviderType::Echo, "m", None, None, None);
        let completion = DriverCompletion::new(CompletionDriver::new(provider));
        assert_eq!(completion.complete("hi").unwrap(), "[echo] hi");
    }
}
