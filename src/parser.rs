// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Full command-line parse: task selection first, then parameters.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::command::Command;
use crate::error::Result;
use crate::param::ArgHandler;
use crate::task::TaskSelector;

/// A successful parse and whatever input it could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub command: Command,
    pub unused: Vec<String>,
}

impl Parsed {
    /// Human-readable notice about ignored input; not an error.
    pub fn warning(&self) -> Option<String> {
        if self.unused.is_empty() {
            None
        } else {
            Some(format!("Ignoring unused arguments: {}", self.unused.join(" ")))
        }
    }
}

/// Parser for one operation. Both capabilities are required up front.
#[derive(Debug, Clone)]
pub struct CommandParser {
    operation: String,
    tasks: TaskSelector,
    args: ArgHandler,
}

impl CommandParser {
    pub fn new(operation: &str, tasks: TaskSelector, args: ArgHandler) -> Self {
        Self {
            operation: operation.to_string(),
            tasks,
            args,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn task_selector(&self) -> TaskSelector {
        self.tasks
    }

    pub fn arg_handler(&self) -> &ArgHandler {
        &self.args
    }

    /// Parses `tokens` against `now`. The first error ends the parse.
    pub fn parse(&self, now: NaiveDateTime, tokens: &[String]) -> Result<Parsed> {
        let (tasks, rest) = self.tasks.resolve(tokens)?;
        let handled = self.args.handle(now, rest)?;
        debug!(
            operation = %self.operation,
            tasks = tasks.len(),
            quantities = handled.quantities.len(),
            unused = handled.unused.len(),
            "parsed command"
        );
        Ok(Parsed {
            command: Command::new(&self.operation, tasks, handled.quantities),
            unused: handled.unused,
        })
    }
}
