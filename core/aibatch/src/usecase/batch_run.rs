//! バッチ実行エンジン（再開位置の解決と逐次処理ループ）

use crate::domain::{ColumnName, ResultRow};
use crate::ports::outbound::{PromptSource, Reporter, ResultStore};
use crate::usecase::RetryingCompletion;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Clock, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// バッチ実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// 全件処理済みで何もしなかった
    NothingToDo,
    /// 残りのプロンプトを最後まで処理した
    Completed {
        /// 入力プロンプトの総数
        total: u64,
        /// 今回の実行で処理した件数
        processed_now: u64,
    },
}

/// バッチ実行のユースケース
///
/// 入力の読み込みと結果テーブルの作成は致命的エラー（即中断）。
/// ループに入った後は、プロンプト単位の失敗を停止理由にしない。
pub struct BatchRunner {
    prompts: Arc<dyn PromptSource>,
    store: Arc<dyn ResultStore>,
    completion: RetryingCompletion,
    clock: Arc<dyn Clock>,
    reporter: Arc<dyn Reporter>,
    logger: Arc<dyn Log>,
}

impl BatchRunner {
    pub fn new(
        prompts: Arc<dyn PromptSource>,
        store: Arc<dyn ResultStore>,
        completion: RetryingCompletion,
        clock: Arc<dyn Clock>,
        reporter: Arc<dyn Reporter>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            prompts,
            store,
            completion,
            clock,
            reporter,
            logger,
        }
    }

    /// バッチを実行する
    ///
    /// 結果テーブルの既存行数を再開オフセットとして、残りのプロンプトを
    /// 順に補完して 1 件ずつ追記する。
    pub fn run(
        &self,
        input: &Path,
        column: &ColumnName,
        output: &Path,
    ) -> Result<BatchOutcome, Error> {
        let _ = self
            .reporter
            .info(&format!("Loading input file: {}...", input.display()));
        let prompts = self.prompts.load(input, column)?;
        let total = prompts.len() as u64;

        let processed = self.store.initialize(output)?;

        let _ = self.reporter.info(&format!("Total prompts: {}", total));
        let _ = self.reporter.info(&format!("Already processed: {}", processed));

        if processed >= total {
            let _ = self.reporter.info("All prompts have been processed!");
            return Ok(BatchOutcome::NothingToDo);
        }

        let _ = self
            .reporter
            .info(&format!("Starting from index: {}", processed + 1));
        self.reporter.progress_start(processed, total);

        let mut processed_now = 0u64;
        for (i, prompt) in prompts[processed as usize..].iter().enumerate() {
            // index は入力列での 1 始まりの位置。既存行の続きになるように振る
            let index = processed + i as u64 + 1;
            let timestamp = self.clock.timestamp();
            // complete は失敗しない（尽きた場合は "ERROR: ..." を返す）
            let response = self.completion.complete(prompt);
            let row = ResultRow {
                index,
                prompt: prompt.as_ref().to_string(),
                response,
                timestamp,
            };
            if let Err(e) = self.store.append(output, &row) {
                // 追記失敗は報告して次へ進む。書けなかった行の分だけ
                // 以後の再開位置が手前にずれる（既知の制約）
                let _ = self.reporter.error(&format!("Failed to write result: {}", e));
                let _ = self.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Error,
                    message: "result write failed".to_string(),
                    kind: Some("store".to_string()),
                    fields: {
                        let mut m = BTreeMap::new();
                        m.insert("index".to_string(), serde_json::json!(index));
                        m.insert("error".to_string(), serde_json::json!(e.to_string()));
                        Some(m)
                    },
                });
            }
            let _ = self.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Info,
                message: "prompt processed".to_string(),
                kind: Some("prompt".to_string()),
                fields: {
                    let mut m = BTreeMap::new();
                    m.insert("index".to_string(), serde_json::json!(index));
                    m.insert(
                        "response_chars".to_string(),
                        serde_json::json!(row.response.chars().count()),
                    );
                    Some(m)
                },
            });
            self.reporter.progress_inc();
            processed_now += 1;
        }

        self.reporter.progress_finish();
        let _ = self.reporter.info("Processing Finished Successfully!");
        Ok(BatchOutcome::Completed {
            total,
            processed_now,
        })
    }
}
