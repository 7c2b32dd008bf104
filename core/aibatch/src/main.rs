mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::BatchCommand;
use ports::inbound::RunBatchApp;
use std::process;
use usecase::BatchOutcome;
use wiring::wire_batch;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner;

impl RunBatchApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let rc = match config_to_command(config)? {
            BatchCommand::Help => {
                print_help();
                return Ok(0);
            }
            BatchCommand::Run(rc) => rc,
        };

        let app = wire_batch(&rc);
        let _ = app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "batch started".to_string(),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert(
                    "input".to_string(),
                    serde_json::json!(rc.input.display().to_string()),
                );
                m.insert(
                    "output".to_string(),
                    serde_json::json!(rc.output.display().to_string()),
                );
                m.insert("model".to_string(), serde_json::json!(rc.model.as_ref()));
                Some(m)
            },
        });

        let result = app.batch.run(&rc.input, &rc.column, &rc.output);
        match &result {
            Ok(BatchOutcome::Completed {
                total,
                processed_now,
            }) => {
                let _ = app.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Info,
                    message: "batch finished".to_string(),
                    kind: Some("lifecycle".to_string()),
                    fields: {
                        let mut m = std::collections::BTreeMap::new();
                        m.insert("total".to_string(), serde_json::json!(total));
                        m.insert("processed_now".to_string(), serde_json::json!(processed_now));
                        Some(m)
                    },
                });
            }
            Ok(BatchOutcome::NothingToDo) => {
                let _ = app.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Info,
                    message: "nothing to do".to_string(),
                    kind: Some("lifecycle".to_string()),
                    fields: None,
                });
            }
            Err(e) => {
                let _ = app.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Error,
                    message: e.to_string(),
                    kind: Some("error".to_string()),
                    fields: None,
                });
            }
        }
        result.map(|_| 0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("aibatch: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    // カレントディレクトリの .env を読み込む（無ければ何もしない）
    let _ = dotenv::dotenv();
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let runner = Runner;
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: aibatch -i <input.csv> -c <column> -o <output.csv> -m <model> [options]");
}

fn print_help() {
    println!("Usage: aibatch -i <input.csv> -c <column> -o <output.csv> -m <model> [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -q, --quiet                Suppress the progress bar and informational messages");
    println!("  -i, --input <file>         Input CSV file containing the prompt column");
    println!("  -o, --output <file>        Output CSV file for results. Existing rows are kept and the run resumes after them.");
    println!("  -c, --column <name>        Name of the prompt column in the input CSV");
    println!("  -m, --model <model>        Model name (e.g. qwen-plus, gpt-4o-mini). Also used as the response column header.");
    println!("  -p, --provider <provider>  LLM provider (openai_compat, echo). Default: openai_compat");
    println!("  --base-url <url>           Base URL of the chat completions endpoint. Default: DashScope compatible mode");
    println!("  --api-key-env <var>        Environment variable holding the API key. Default: DASHSCOPE_API_KEY");
    println!("  -t, --temperature <value>  Sampling temperature. Default: 0.01");
    println!("  --max-retries <count>      Maximum completion attempts per prompt. Default: 3");
    println!("  --retry-delay <seconds>    Wait between attempts in seconds. Default: 2");
    println!("  --log-file <file>          Write JSONL logs to this file");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  DASHSCOPE_API_KEY    API key for the default provider. Override the variable name with --api-key-env.");
    println!("                       A .env file in the working directory is loaded at startup.");
    println!();
    println!("Description:");
    println!("  Read prompts from a CSV column, send each one to the LLM, and append");
    println!("  one result row per prompt to the output CSV.");
    println!("  If the output file already exists, processing resumes after the last recorded row.");
    println!();
    println!("Examples:");
    println!("  aibatch -i questions.csv -c Prompt -o answers.csv -m qwen-plus");
    println!("  aibatch -i questions.csv -c Prompt -o answers.csv -m qwen-plus --max-retries 5 --retry-delay 10");
    println!("  aibatch -i questions.csv -c Prompt -o answers.csv -m test -p echo -q");
}
