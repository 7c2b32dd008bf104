//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、プロンプトをそのまま返します。
//! API キー不要で、動作確認やテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({
            "prompt": prompt,
        });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // リクエストからプロンプトを取り出し、そのままレスポンスへ折り返す
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        let prompt = v["prompt"].as_str().unwrap_or("");
        Ok(json!({ "echo": prompt }).to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["echo"].as_str().map(|s| format!("[echo] {}", s)))
    }
}
