//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `aiken_core` linkage with deterministic output.
//! - Show the exported record shape for a fixed sample item.
//!
//! Logging stays off unless `AIKEN_LOG_DIR` names an absolute directory;
//! `AIKEN_LOG_LEVEL` overrides the build-mode default level.

use aiken_core::{answer_key_from_line, export_items, init_logging_with, LoggingConfig, TestItem};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "AIKEN_LOG_DIR";
const LOG_LEVEL_ENV: &str = "AIKEN_LOG_LEVEL";

fn logging_config(log_dir: Option<String>, level: Option<String>) -> Option<LoggingConfig> {
    let log_dir = log_dir.filter(|dir| !dir.trim().is_empty())?;
    let mut config = LoggingConfig::new(log_dir);
    if let Some(level) = level {
        config.level = level;
    }
    Some(config)
}

fn sample_item() -> TestItem {
    let mut item = TestItem::new();
    item.set_stem("What is the capital of France?")
        .append_distractor("Paris")
        .append_distractor("London")
        .append_distractor("Berlin");
    if let Some(key) = answer_key_from_line("ANSWER: A") {
        item.set_correct_answer(key);
    }
    item
}

fn main() -> ExitCode {
    println!("aiken_core ping={}", aiken_core::ping());
    println!("aiken_core version={}", aiken_core::core_version());

    let config = logging_config(
        std::env::var(LOG_DIR_ENV).ok(),
        std::env::var(LOG_LEVEL_ENV).ok(),
    );
    if let Some(config) = config {
        if let Err(err) = init_logging_with(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    let records = match export_items(&[sample_item()]) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("sample export failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(&records) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to encode sample records: {err}");
            ExitCode::FAILURE
        }
    }
}
