//! 補完ドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → HTTP → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;

/// 補完ドライバー
pub struct CompletionDriver<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送信して応答テキストを取得
    ///
    /// # Arguments
    /// * `prompt` - ユーザープロンプト
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(String)` - 応答テキスト
    /// * `Err(Error)` - エラーメッセージと終了コード
    pub fn complete(&self, prompt: &str, system_instruction: Option<&str>) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt, system_instruction)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        // テキストが無い応答（choices 空など）はエラー扱い
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response".to_string()))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // モックプロバイダ
    struct MockProvider;

    impl CompletionProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(
            &self,
            prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<Value, Error> {
            Ok(serde_json::json!({ "prompt": prompt }))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(r#"{"choices":[{"message":{"content":"Hello, world!"}}]}"#.to_string())
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            let text = v["choices"][0]["message"]["content"]
                .as_str()
                .map(|s| s.to_string());
            Ok(text)
        }
    }

    #[test]
    fn test_completion_driver_new() {
        let driver = CompletionDriver::new(MockProvider);
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_completion_driver_complete() {
        let driver = CompletionDriver::new(MockProvider);
        let result = driver.complete("test", None);
        assert_eq!(result.unwrap(), "Hello, world!");
    }

    #[test]
    fn test_completion_driver_complete_with_system_instruction() {
        let driver = CompletionDriver::new(MockProvider);
        let result = driver.complete("test", Some("You are helpful"));
        assert_eq!(result.unwrap(), "Hello, world!");
    }

    // エラーハンドリングのテスト用モックプロバイダ
    struct ErrorMockProvider {
        error_type: ErrorType,
    }

    enum ErrorType {
        PayloadError,
        HttpError,
        ParseError,
        NoText,
    }

    impl CompletionProvider for ErrorMockProvider {
        fn name(&self) -> &str {
            "error_mock"
        }

        fn make_request_payload(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<Value, Error> {
            match self.error_type {
                ErrorType::PayloadError => Err(Error::json("Failed to create payload")),
                _ => Ok(serde_json::json!({ "prompt": "test" })),
            }
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            match self.error_type {
                ErrorType::HttpError => Err(Error::http("HTTP request failed")),
                _ => Ok(r#"{"choices":[{"message":{"content":"Hello"}}]}"#.to_string()),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            match self.error_type {
                ErrorType::ParseError => Err(Error::json("Failed to parse response")),
                ErrorType::NoText => Ok(None),
                _ => {
                    let v: Value = serde_json::from_str(response_json)
                        .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
                    let text = v["choices"][0]["message"]["content"]
                        .as_str()
                        .map(|s| s.to_string());
                    Ok(text)
                }
            }
        }
    }

    #[test]
    fn test_completion_driver_payload_error() {
        let driver = CompletionDriver::new(ErrorMockProvider {
            error_type: ErrorType::PayloadError,
        });
        let err = driver.complete("test", None).unwrap_err();
        assert!(err.to_string().contains("Failed to create payload"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_completion_driver_http_error() {
        let driver = CompletionDriver::new(ErrorMockProvider {
            error_type: ErrorType::HttpError,
        });
        let err = driver.complete("test", None).unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_completion_driver_parse_error() {
        let driver = CompletionDriver::new(ErrorMockProvider {
            error_type: ErrorType::ParseError,
        });
        let err = driver.complete("test", None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse response"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_completion_driver_no_text() {
        let driver = CompletionDriver::new(ErrorMockProvider {
            error_type: ErrorType::NoText,
        });
        let err = driver.complete("test", None).unwrap_err();
        assert!(err.to_string().contains("No text in response"));
        assert_eq!(err.exit_code(), 74);
    }

    // Echoプロバイダを使った実際のテスト
    #[test]
    fn test_completion_driver_with_echo_provider() {
        use crate::llm::echo::EchoProvider;
        let driver = CompletionDriver::new(EchoProvider::new());
        let result = driver.complete("Hello, echo!", None);
        assert_eq!(result.unwrap(), "[echo] Hello, echo!");
    }

    #[test]
    fn test_completion_driver_with_echo_provider_and_system() {
        use crate::llm::echo::EchoProvider;
        let driver = CompletionDriver::new(EchoProvider::new());
        let result = driver.complete("Hello", Some("You are helpful"));
        assert_eq!(result.unwrap(), "[echo] Hello");
    }
}
