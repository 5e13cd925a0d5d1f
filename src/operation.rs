// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! The client operations and their help text.
//!
//! | Operation  | Tasks    | Description |
//! |------------|----------|-------------|
//! | `start`    | one      | Start a task, stopping the active one. |
//! | `stop`     | none     | Stop the current task. |
//! | `abort`    | none     | Abort the current task without saving. |
//! | `current`  | none     | Show the active task. |
//! | `ping`     | none     | Check whether the server is running. |
//! | `shutdown` | none     | Shut the server down. |
//! | `query`    | list/all | Time spent on tasks in a period; see [`crate::query`]. |

use std::fmt::Write;

use crate::param::ArgHandler;
use crate::parser::CommandParser;
use crate::query::query_params;
use crate::task::TaskSelector;

pub const OP_START: &str = "start";
pub const OP_STOP: &str = "stop";
pub const OP_ABORT: &str = "abort";
pub const OP_CURRENT: &str = "current";
pub const OP_PING: &str = "ping";
pub const OP_SHUTDOWN: &str = "shutdown";
pub const OP_QUERY: &str = "query";

/// Name of the binary, as shown in usage lines.
pub const PROGRAM: &str = "tl";

/// A named operation with its parser.
#[derive(Debug, Clone)]
pub struct Operation {
    pub summary: &'static str,
    pub parser: CommandParser,
}

impl Operation {
    pub fn new(name: &str, tasks: TaskSelector, args: ArgHandler, summary: &'static str) -> Self {
        Self {
            summary,
            parser: CommandParser::new(name, tasks, args),
        }
    }

    pub fn name(&self) -> &str {
        self.parser.operation()
    }

    /// `tl query <task>[,<task>...]|:all [:param...]`
    pub fn usage(&self) -> String {
        let mut line = format!("{} {}", PROGRAM, self.name());
        let tasks = self.parser.task_selector().usage();
        if !tasks.is_empty() {
            line.push(' ');
            line.push_str(tasks);
        }
        if self.parser.arg_handler().params().next().is_some() {
            line.push_str(" [:param...]");
        }
        line
    }

    /// Usage line, summary and one line per parameter.
    pub fn help(&self) -> String {
        let mut out = format!("{}\n    {}\n", self.usage(), self.summary);
        let params: Vec<_> = self.parser.arg_handler().params().collect();
        let width = params.iter().map(|p| p.synopsis().len()).max().unwrap_or(0);
        for param in params {
            let _ = writeln!(out, "        {:<width$}  {}", param.synopsis(), param.description);
        }
        out
    }
}

/// All operations, in the order help lists them.
#[derive(Debug, Clone)]
pub struct Operations {
    ops: Vec<Operation>,
}

impl Operations {
    pub fn standard() -> Self {
        let plain = |name, summary| Operation::new(name, TaskSelector::None, ArgHandler::NoParams, summary);
        Self {
            ops: vec![
                Operation::new(
                    OP_START,
                    TaskSelector::Single,
                    ArgHandler::NoParams,
                    "Start a task, stopping the active one",
                ),
                plain(OP_STOP, "Stop the current task"),
                plain(OP_ABORT, "Abort the current task without saving"),
                plain(OP_CURRENT, "Show the active task"),
                plain(OP_PING, "Check whether the server is running"),
                plain(OP_SHUTDOWN, "Shut the server down"),
                Operation::new(
                    OP_QUERY,
                    TaskSelector::Multi,
                    ArgHandler::Params(query_params()),
                    "Time spent on tasks in a period (default: today)",
                ),
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&Operation> {
        self.ops.iter().find(|op| op.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.ops.iter()
    }

    /// Help for every operation.
    pub fn help(&self) -> String {
        let mut out = format!(
            "Usage: {} <operation> [args...]\n       {} help <operation>\n\n",
            PROGRAM, PROGRAM
        );
        for op in &self.ops {
            out.push_str(&op.help());
            out.push('\n');
        }
        out.push_str("Tasks are comma separated; ':all' selects every task.\n");
        out
    }

    /// Unix manual page in groff format.
    pub fn manpage(&self) -> String {
        let mut out = format!(
            ".TH TL 1 \"\" \"\" \"{0}\"\n.SH NAME\n{0} \\- time log client\n.SH SYNOPSIS\n",
            PROGRAM
        );
        for op in &self.ops {
            let _ = writeln!(out, ".B {}\n.PP", groff_escape(&op.usage()));
        }
        out.push_str(".SH OPERATIONS\n");
        for op in &self.ops {
            let _ = writeln!(out, ".TP\n.B {}\n{}", op.name(), op.summary);
        }
        if let Some(query) = self.find(OP_QUERY) {
            out.push_str(".SH QUERY PARAMETERS\n");
            for param in query.parser.arg_handler().params() {
                let _ = writeln!(
                    out,
                    ".TP\n.B {}\n{}",
                    groff_escape(&param.synopsis()),
                    param.description
                );
            }
        }
        out.push_str(
            ".SH ENVIRONMENT\n\
             .TP\n.B TL_LOG\nLog filter directive (default: warn).\n\
             .TP\n.B TL_DEBUG\nIf set, log at debug level.\n\
             .TP\n.B TL_NOW\nResolve queries as if it were this date or date-time.\n",
        );
        out
    }
}

/// Escapes characters groff treats specially.
fn groff_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('-', "\\-")
}
