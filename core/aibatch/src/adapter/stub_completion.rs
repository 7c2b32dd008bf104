//! テスト用: 台本どおりに応答する Completion 実装

#[cfg(test)]
mod stub {
    use common::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::ports::outbound::Completion;

    /// テスト用: 呼び出しごとに台本の先頭から結果を返す Stub
    ///
    /// 台本が尽きたら最後の結果を繰り返す。呼び出し回数と
    /// 受け取ったプロンプトを記録する。
    pub struct StubCompletion {
        script: Vec<Result<String, Error>>,
        calls: AtomicUsize,
        asked: Mutex<Vec<String>>,
    }

    impl StubCompletion {
        pub fn new(script: Vec<Result<String, Error>>) -> Self {
            Self {
                script,
                calls: AtomicUsize::new(0),
                asked: Mutex::new(Vec::new()),
            }
        }

        /// 常に同じテキストを返す Stub
        pub fn always_ok(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        /// 常に失敗する Stub
        pub fn always_fail(message: &str) -> Self {
            Self::new(vec![Err(Error::http(message.to_string()))])
        }

        /// n 回失敗した後に成功する Stub
        pub fn fail_n_then_ok(n: usize, text: &str) -> Self {
            let mut script: Vec<Result<String, Error>> = Vec::new();
            for _ in 0..n {
                script.push(Err(Error::http("connection reset".to_string())));
            }
            script.push(Ok(text.to_string()));
            Self::new(script)
        }

        /// これまでの呼び出し回数
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// これまでに受け取ったプロンプト（呼び出し順）
        pub fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    impl Completion for StubCompletion {
        fn complete(&self, prompt: &str) -> Result<String, Error> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            self.asked.lock().unwrap().push(prompt.to_string());
            let idx = i.min(self.script.len() - 1);
            self.script[idx].clone()
        }
    }
}

#[cfg(test)]
pub use stub::StubCompletion;
