//! リトライ付き補完（固定間隔・回数上限・失敗は文字列として回収）

use crate::domain::{Prompt, RetryPolicy};
use crate::ports::outbound::{Completion, Reporter};
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

/// Completion をリトライ付きで包むユースケース
///
/// 呼び出し側にエラーを返さない。リトライを使い切った場合は
/// `ERROR: <失敗内容>` を応答テキストとして返し、1 件の失敗で
/// バッチ全体を止めずに行として記録させる。
pub struct RetryingCompletion {
    completion: Arc<dyn Completion>,
    policy: RetryPolicy,
    reporter: Arc<dyn Reporter>,
    logger: Arc<dyn Log>,
}

impl RetryingCompletion {
    pub fn new(
        completion: Arc<dyn Completion>,
        policy: RetryPolicy,
        reporter: Arc<dyn Reporter>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            completion,
            policy,
            reporter,
            logger,
        }
    }

    /// プロンプト 1 件を補完する。必ず応答文字列を返す
    pub fn complete(&self, prompt: &Prompt) -> String {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1u32;
        loop {
            match self.completion.complete(prompt.as_ref()) {
                Ok(text) => return text,
                Err(e) => {
                    if attempt >= max_attempts {
                        return format!("ERROR: {}", e);
                    }
                    let delay = self.policy.delay();
                    let _ = self.reporter.warn(&format!(
                        "API request failed: {}. Retrying in {}s...",
                        e,
                        delay.as_secs()
                    ));
                    let _ = self.logger.log(&LogRecord {
                        ts: now_iso8601(),
                        level: LogLevel::Warn,
                        message: "completion retry".to_string(),
                        kind: Some("retry".to_string()),
                        fields: {
                            let mut m = BTreeMap::new();
                            m.insert("attempt".to_string(), serde_json::json!(attempt));
                            m.insert("error".to_string(), serde_json::json!(e.to_string()));
                            Some(m)
                        },
                    });
                    thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{CollectingReporter, StubCompletion};
    use common::adapter::NoopLog;

    fn retrying(
        stub: Arc<StubCompletion>,
        reporter: Arc<CollectingReporter>,
        max_retries: u32,
    ) -> RetryingCompletion {
        RetryingCompletion::new(
            stub,
            // テストは待ち時間ゼロで回す
            RetryPolicy::new(max_retries, 0),
            reporter,
            Arc::new(NoopLog),
        )
    }

    #[test]
    fn test_success_on_first_attempt() {
        let stub = Arc::new(StubCompletion::always_ok("answer"));
        let reporter = Arc::new(CollectingReporter::new());
        let r = retrying(Arc::clone(&stub), Arc::clone(&reporter), 3);

        let text = r.complete(&Prompt::new("q"));
        assert_eq!(text, "answer");
        assert_eq!(stub.calls(), 1);
        assert!(reporter.messages_of("warn").is_empty());
    }

    #[test]
    fn test_recovers_after_transient_failures() {
        let stub = Arc::new(StubCompletion::fail_n_then_ok(2, "recovered"));
        let reporter = Arc::new(CollectingReporter::new());
        let r = retrying(Arc::clone(&stub), Arc::clone(&reporter), 3);

        let text = r.complete(&Prompt::new("q"));
        assert_eq!(text, "recovered");
        assert_eq!(stub.calls(), 3);

        let warns = reporter.messages_of("warn");
        assert_eq!(warns.len(), 2);
        assert!(warns[0].contains("API request failed: connection reset"));
        assert!(warns[0].contains("Retrying in 0s..."));
    }

    #[test]
    fn test_exhaustion_returns_error_string() {
        let stub = Arc::new(StubCompletion::always_fail("status 500"));
        let reporter = Arc::new(CollectingReporter::new());
        let r = retrying(Arc::clone(&stub), Arc::clone(&reporter), 3);

        let text = r.complete(&Prompt::new("q"));
        assert_eq!(text, "ERROR: status 500");
        // 上限ちょうどで打ち切る
        assert_eq!(stub.calls(), 3);
        // 最後の試行の後には警告を出さない
        assert_eq!(reporter.messages_of("warn").len(), 2);
    }

    #[test]
    fn test_single_attempt_policy_never_warns() {
        let stub = Arc::new(StubCompletion::always_fail("boom"));
        let reporter = Arc::new(CollectingReporter::new());
        let r = retrying(Arc::clone(&stub), Arc::clone(&reporter), 1);

        let text = r.complete(&Prompt::new("q"));
        assert_eq!(text, "ERROR: boom");
        assert_eq!(stub.calls(), 1);
        assert!(reporter.messages_of("warn").is_empty());
    }

    #[test]
    fn test_zero_retries_clamped_to_single_attempt() {
        let stub = Arc::new(StubCompletion::always_fail("boom"));
        let reporter = Arc::new(CollectingReporter::new());
        let r = retrying(Arc::clone(&stub), Arc::clone(&reporter), 0);

        let text = r.complete(&Prompt::new("q"));
        assert_eq!(text, "ERROR: boom");
        assert_eq!(stub.calls(), 1);
    }
}
