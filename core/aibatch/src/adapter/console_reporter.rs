//! コンソールへの報告（進捗バーと人間向けメッセージ）

use crate::ports::outbound::Reporter;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;

/// 標準出力・標準エラーへの Reporter 実装
///
/// 進捗バー表示中のメッセージは `ProgressBar::println` 経由で出し、
/// バーの描画を壊さない。quiet 時は info と進捗バーを抑制する
/// （警告・エラーは出し続ける）。
pub struct ConsoleReporter {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn println_above_bar(&self, line: &str) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                bar.println(line);
                return;
            }
        }
        eprintln!("{}", line);
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        println!("{}", message);
        std::io::stdout().flush()?;
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<()> {
        self.println_above_bar(&format!("[Warning] {}", message));
        Ok(())
    }

    fn error(&self, message: &str) -> Result<()> {
        self.println_above_bar(&format!("[Error] {}", message));
        Ok(())
    }

    fn progress_start(&self, done: u64, total: u64) {
        if self.quiet {
            return;
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Processing [{bar:30.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("=>-"),
        );
        bar.set_position(done);
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn progress_inc(&self) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn progress_finish(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish();
            }
        }
    }
}
