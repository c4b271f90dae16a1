//! tm - task manager partial-update tool
//!
//! Validates PATCH-style update requests against entity rules and prints the
//! merged snapshot as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Apply an update to a task snapshot
//! tm merge --entity task --current task.json --request patch.json --pretty
//!
//! # Validate a new label read from stdin
//! echo '{"name": "bug"}' | tm create --entity label --request -
//!
//! # Show which fields a label accepts
//! tm schema --entity label
//! ```
//!
//! Exit codes: 0 success, 1 error, 2 validation rejection (issues on stdout).

use tm_cli::{Cli, EXIT_FAILURE, EXIT_OK, error_body, logger, run, runner::load_config};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_dir) = match load_config(cli.config_dir.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file_path(&config_dir),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_FAILURE);
    }

    config.log_summary();

    match run(&cli.command, &config) {
        Ok(value) => print_json(&value, cli.pretty, EXIT_OK),
        Err(e) => match error_body(&e) {
            Some(body) => print_json(&body, cli.pretty, e.exit_code()),
            None => {
                eprintln!("Error: {}", e);
                ExitCode::from(e.exit_code())
            }
        },
    }
}

fn print_json(value: &Value, pretty: bool, code: u8) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(code)
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
