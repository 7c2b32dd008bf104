//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdFileSystem};
use common::llm::{create_provider, CompletionDriver};
use common::ports::outbound::{Clock, FileSystem, Log};

use crate::adapter::{ConsoleReporter, CsvPromptSource, CsvResultStore, DriverCompletion};
use crate::domain::RunConfig;
use crate::ports::outbound::{Completion, Reporter};
use crate::usecase::{BatchRunner, RetryingCompletion};

/// 組み立て済みのアプリケーション一式
pub struct App {
    pub batch: BatchRunner,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで BatchRunner を組み立てる
pub fn wire_batch(config: &RunConfig) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let logger: Arc<dyn Log> = match &config.log_file {
        Some(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        None => Arc::new(NoopLog),
    };
    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::new(config.quiet));

    let provider = create_provider(
        config.provider_type,
        config.model.as_ref(),
        config.base_url.clone(),
        config.api_key.clone(),
        config.temperature,
    );
    let completion: Arc<dyn Completion> =
        Arc::new(DriverCompletion::new(CompletionDriver::new(provider)));
    let retrying = RetryingCompletion::new(
        completion,
        config.retry.clone(),
        Arc::clone(&reporter),
        Arc::clone(&logger),
    );

    let prompts = Arc::new(CsvPromptSource::new(Arc::clone(&fs)));
    let store = Arc::new(CsvResultStore::new(Arc::clone(&fs), config.model.clone()));

    let batch = BatchRunner::new(
        prompts,
        store,
        retrying,
        clock,
        reporter,
        Arc::clone(&logger),
    );
    App { batch, logger }
}
