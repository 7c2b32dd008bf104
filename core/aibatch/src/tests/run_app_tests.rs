use crate::cli::Config;
use crate::domain::ColumnName;
use crate::ports::inbound::RunBatchApp;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runner で config を実行する（テスト用の入口）
fn run_app(config: Config) -> Result<i32, Error> {
    let runner = crate::Runner;
    runner.run(config)
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect()
}

/// echo プロバイダで完結する Config（ネットワーク・API キー不要）
fn echo_config(input: PathBuf, output: PathBuf) -> Config {
    Config {
        input: Some(input),
        output: Some(output),
        column: Some(ColumnName::new("Prompt")),
        model: Some(ModelName::new("test-model")),
        provider: Some(ProviderName::new("echo")),
        quiet: true,
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    let result = run_app(config);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_run_app_help_takes_precedence() {
    // help 指定時は他の引数がそろっていなくても検証に入らない
    let config = Config {
        help: true,
        input: Some(PathBuf::from("in.csv")),
        ..Default::default()
    };
    let result = run_app(config);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_run_app_without_input() {
    let config = Config::default();
    let result = run_app(config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("-i/--input"),
        "expected missing-input message, got: {}",
        err
    );
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_without_column() {
    let config = Config {
        input: Some(PathBuf::from("in.csv")),
        output: Some(PathBuf::from("out.csv")),
        ..Default::default()
    };
    let result = run_app(config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("-c/--column"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_with_unknown_provider() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    std::fs::write(&input, "Prompt\nhello\n").unwrap();
    let config = Config {
        provider: Some(ProviderName::new("unknown")),
        ..echo_config(input, dir.path().join("out.csv"))
    };
    let result = run_app(config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Unknown provider 'unknown'"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_default_provider_requires_api_key() {
    let var = "AIBATCH_RUN_APP_KEY_UNSET";
    std::env::remove_var(var);
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    std::fs::write(&input, "Prompt\nhello\n").unwrap();
    let config = Config {
        provider: None,
        api_key_env: Some(var.to_string()),
        ..echo_config(input, dir.path().join("out.csv"))
    };
    let result = run_app(config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("API Key not found!"));
    assert!(err.to_string().contains(var));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_echo_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    std::fs::write(&input, "Prompt\nHow are you?\nWhat is Rust?\n").unwrap();
    let output = dir.path().join("out.csv");
    let log_file = dir.path().join("batch.jsonl");

    let config = Config {
        log_file: Some(log_file.clone()),
        ..echo_config(input, output.clone())
    };
    let result = run_app(config);
    assert!(result.is_ok(), "echo provider should succeed without API key");
    assert_eq!(result.unwrap(), 0);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][1], "How are you?");
    assert_eq!(rows[0][2], "[echo] How are you?");
    assert_eq!(rows[1][2], "[echo] What is Rust?");

    // JSONL ログに lifecycle / prompt のレコードが残る
    let log = std::fs::read_to_string(&log_file).unwrap();
    for line in log.lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("ts").is_some());
    }
    assert!(log.contains("batch started"));
    assert!(log.contains("prompt processed"));
    assert!(log.contains("batch finished"));
}

#[test]
fn test_run_app_rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    std::fs::write(&input, "Prompt\nalpha\nbeta\n").unwrap();
    let output = dir.path().join("out.csv");

    let result = run_app(echo_config(input.clone(), output.clone()));
    assert_eq!(result.unwrap(), 0);
    let first = std::fs::read_to_string(&output).unwrap();

    // 同じ入力での再実行は何も追記しない
    let result = run_app(echo_config(input, output.clone()));
    assert_eq!(result.unwrap(), 0);
    let second = std::fs::read_to_string(&output).unwrap();
    assert_eq!(first, second);
    assert_eq!(read_rows(&output).len(), 2);
}
