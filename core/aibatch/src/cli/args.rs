use crate::domain::{
    BatchCommand, ColumnName, RetryPolicy, RunConfig, DEFAULT_MAX_RETRIES,
    DEFAULT_RETRY_DELAY_SECS,
};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::ProviderType;
use std::path::PathBuf;

/// API キーを読むデフォルトの環境変数名
pub const DEFAULT_API_KEY_ENV: &str = "DASHSCOPE_API_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -q / --quiet: 進捗バーと情報メッセージを抑制
    pub quiet: bool,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub column: Option<ColumnName>,
    pub model: Option<ModelName>,
    pub provider: Option<ProviderName>,
    pub base_url: Option<String>,
    /// API キーを読む環境変数名（None のとき DEFAULT_API_KEY_ENV）
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub max_retries: Option<u32>,
    pub retry_delay: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            quiet: false,
            input: None,
            output: None,
            column: None,
            model: None,
            provider: None,
            base_url: None,
            api_key_env: None,
            temperature: None,
            max_retries: None,
            retry_delay: None,
            log_file: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("aibatch")
        .about("Send prompts from a CSV column to an LLM and record each response")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress the progress bar and informational messages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .help("Input CSV file containing the prompt column")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Output CSV file for results (appended to on resume)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("column")
                .short('c')
                .long("column")
                .value_name("name")
                .help("Name of the prompt column in the input CSV")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (e.g. qwen-plus, gpt-4o-mini)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (openai_compat, echo; default: openai_compat)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("Base URL of the chat completions endpoint")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("api-key-env")
                .long("api-key-env")
                .value_name("var")
                .help("Environment variable holding the API key (default: DASHSCOPE_API_KEY)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("temperature")
                .short('t')
                .long("temperature")
                .value_name("value")
                .help("Sampling temperature")
                .value_parser(value_parser!(f32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("max-retries")
                .long("max-retries")
                .value_name("count")
                .help("Maximum completion attempts per prompt (default: 3)")
                .value_parser(value_parser!(u32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("retry-delay")
                .long("retry-delay")
                .value_name("seconds")
                .help("Wait between attempts in seconds (default: 2)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("file")
                .help("Write JSONL logs to this file")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let quiet = matches.get_flag("quiet");
    let input = matches.get_one::<String>("input").map(PathBuf::from);
    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let column = matches
        .get_one::<String>("column")
        .map(|s| ColumnName::new(s.clone()));
    let model = matches
        .get_one::<String>("model")
        .map(|s| ModelName::new(s.clone()));
    let provider = matches
        .get_one::<String>("provider")
        .map(|s| ProviderName::new(s.clone()));
    let base_url = matches.get_one::<String>("base-url").cloned();
    let api_key_env = matches.get_one::<String>("api-key-env").cloned();
    let temperature = matches.get_one::<f32>("temperature").copied();
    let max_retries = matches.get_one::<u32>("max-retries").copied();
    let retry_delay = matches.get_one::<u64>("retry-delay").copied();
    let log_file = matches.get_one::<String>("log-file").map(PathBuf::from);

    Config {
        help,
        quiet,
        input,
        output,
        column,
        model,
        provider,
        base_url,
        api_key_env,
        temperature,
        max_retries,
        retry_delay,
        log_file,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -q --quiet -i --input -o --output -c --column -m --model -p --provider --base-url --api-key-env -t --temperature --max-retries --retry-delay --log-file --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for aibatch (options only)
_aibatch() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{opts}" -- "$cur"))
}}
complete -F _aibatch aibatch
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for aibatch (options only)
#compdef aibatch
local -a reply
reply=({opts})
_describe 'aibatch' reply
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for aibatch (options only)
complete -c aibatch -l help -s h -d "Show help"
complete -c aibatch -l quiet -s q -d "Suppress progress output"
complete -c aibatch -l input -s i -d "Input CSV file" -r
complete -c aibatch -l output -s o -d "Output CSV file" -r
complete -c aibatch -l column -s c -d "Prompt column name" -r
complete -c aibatch -l model -s m -d "Model name" -r
complete -c aibatch -l provider -s p -d "LLM provider" -r -a "openai_compat echo"
complete -c aibatch -l base-url -d "Chat completions base URL" -r
complete -c aibatch -l api-key-env -d "API key environment variable" -r
complete -c aibatch -l temperature -s t -d "Sampling temperature" -r
complete -c aibatch -l max-retries -d "Max attempts per prompt" -r
complete -c aibatch -l retry-delay -d "Seconds between attempts" -r
complete -c aibatch -l log-file -d "JSONL log file" -r
complete -c aibatch -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {}
    }
}

/// Config を BatchCommand に変換する（必須項目の検証と既定値の解決）
///
/// API キーはここで環境変数から一度だけ読み取り、値として RunConfig に載せる。
pub fn config_to_command(config: Config) -> Result<BatchCommand, Error> {
    if config.help {
        return Ok(BatchCommand::Help);
    }

    let input = config
        .input
        .ok_or_else(|| Error::invalid_argument("Missing required option: -i/--input <file>"))?;
    let output = config
        .output
        .ok_or_else(|| Error::invalid_argument("Missing required option: -o/--output <file>"))?;
    let column = config
        .column
        .ok_or_else(|| Error::invalid_argument("Missing required option: -c/--column <name>"))?;
    let model = config
        .model
        .ok_or_else(|| Error::invalid_argument("Missing required option: -m/--model <model>"))?;

    let provider_type = match &config.provider {
        Some(name) => ProviderType::from_str(name.as_ref()).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider '{}'. Available providers: openai_compat, echo",
                name
            ))
        })?,
        None => ProviderType::OpenAiCompat,
    };

    // openai_compat のみ API キー必須（echo はネットワークを使わない）
    let api_key = match provider_type {
        ProviderType::OpenAiCompat => {
            let var = config.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
            let key = std::env::var(var)
                .ok()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "API Key not found! Please set '{}' in .env file or environment variables.",
                        var
                    ))
                })?;
            Some(key)
        }
        ProviderType::Echo => None,
    };

    let retry = RetryPolicy::new(
        config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        config.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY_SECS),
    );

    Ok(BatchCommand::Run(RunConfig {
        input,
        output,
        column,
        provider_type,
        model,
        base_url: config.base_url,
        api_key,
        temperature: config.temperature,
        retry,
        log_file: config.log_file,
        quiet: config.quiet,
    }))
}
