// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! # tl — Time log client
//!
//! Parses `tl <operation> [args...]` into a request and prints it on stdout,
//! one line, for the executor to send to the time log server.
//!
//! ## Subcommands
//!
//! | Command    | Description |
//! |------------|-------------|
//! | `start`    | Start a task, stopping the active one. |
//! | `stop`     | Stop the current task. |
//! | `abort`    | Abort the current task without saving. |
//! | `current`  | Show the active task. |
//! | `ping`     | Check whether the server is running. |
//! | `shutdown` | Shut the server down. |
//! | `query`    | Time spent on tasks in a period (default: today). |
//! | `help`     | Help for every operation, or `help <operation>` for one. |
//! | `manpage`  | Output Unix manual page in groff format to stdout. |

use std::env;
use std::process;

use chrono::NaiveDateTime;
use tracing::debug;
use tracing_subscriber::prelude::*;

use tl::{Config, Operations};

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_help(ops: &Operations, topic: Option<&str>) -> Result<String, String> {
    match topic {
        None => Ok(ops.help()),
        Some(name) => ops
            .find(name)
            .map(|op| op.help())
            .ok_or_else(|| format!("Unknown operation: {}\n\n{}", name, ops.help())),
    }
}

/// Parses `rest` for operation `name`: the rendered command and any
/// unused-arguments notice for stderr.
fn cmd_run(
    ops: &Operations,
    name: &str,
    rest: &[String],
    now: NaiveDateTime,
) -> Result<(String, Option<String>), String> {
    let op = ops
        .find(name)
        .ok_or_else(|| format!("Unknown operation: {}\n\n{}", name, ops.help()))?;
    let parsed = op
        .parser
        .parse(now, rest)
        .map_err(|e| format!("{}: {}\nUsage: {}", name, e, op.usage()))?;
    debug!(unused = parsed.unused.len(), "parsed {}", name);
    Ok((parsed.command.to_string(), parsed.warning()))
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    init_logging(&config);

    let mut args: Vec<String> = env::args().skip(1).collect();
    let cmd = args.first().cloned();
    let rest: Vec<String> = if args.len() > 1 {
        args.drain(1..).collect()
    } else {
        Vec::new()
    };
    let ops = Operations::standard();

    debug!(operation = cmd.as_deref().unwrap_or("(none)"), "dispatching");

    let result = match cmd.as_deref() {
        None | Some("-h") | Some("--help") => cmd_help(&ops, None).map(|out| (out, None)),
        Some("help") => cmd_help(&ops, rest.first().map(String::as_str)).map(|out| (out, None)),
        Some("manpage") => Ok((ops.manpage(), None)),
        Some(name) => cmd_run(&ops, name, &rest, config.now()),
    };
    match result {
        Ok((out, notice)) => {
            // Printed regardless of the log filter.
            if let Some(notice) = notice {
                eprintln!("{}", notice);
            }
            print!("{}{}", out, if out.ends_with('\n') { "" } else { "\n" });
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
