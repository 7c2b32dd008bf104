pub(crate) mod collecting_reporter;
pub(crate) mod console_reporter;
pub(crate) mod csv_prompt_source;
pub(crate) mod csv_result_store;
pub(crate) mod llm_completion;
pub(crate) mod stub_completion;
pub(crate) use console_reporter::ConsoleReporter;
pub(crate) use csv_prompt_source::CsvPromptSource;
pub(crate) use csv_result_store::CsvResultStore;
pub(crate) use llm_completion::DriverCompletion;

#[cfg(test)]
pub(crate) use collecting_reporter::CollectingReporter;
#[cfg(test)]
pub(crate) use stub_completion::StubCompletion;
