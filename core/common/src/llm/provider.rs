//! 補完プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 補完プロバイダのトレイト
///
/// 各プロバイダ（OpenAI互換、Echoなど）はこのトレイトを実装する必要があります。
/// 1 プロンプト 1 応答の単発補完のみを扱います。
pub trait CompletionProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - ユーザープロンプト
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn make_request_payload(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Arguments
    /// * `response_json` - レスポンスJSON文字列
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - エラーメッセージと終了コード
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
