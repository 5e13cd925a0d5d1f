// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! The structured request a parse produces.

use std::fmt;

use crate::quantity::Quantity;
use crate::task::ALL_TASKS;

/// An operation with its selected tasks and query quantities.
///
/// Immutable once parsed; ownership passes to whatever executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    operation: String,
    tasks: Vec<String>,
    quantities: Vec<Quantity>,
}

impl Command {
    pub fn new(operation: &str, tasks: Vec<String>, quantities: Vec<Quantity>) -> Self {
        Self {
            operation: operation.to_string(),
            tasks,
            quantities,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// True when the task list is the `:all` sentinel.
    pub fn is_all_tasks(&self) -> bool {
        matches!(self.tasks.as_slice(), [t] if t == ALL_TASKS)
    }

    pub fn into_parts(self) -> (String, Vec<String>, Vec<Quantity>) {
        (self.operation, self.tasks, self.quantities)
    }
}

/// `query tasks=a,b day=2023-06-15 between=2023-06-01,2023-06-15`
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operation)?;
        if !self.tasks.is_empty() {
            write!(f, " tasks={}", self.tasks.join(","))?;
        }
        for q in &self.quantities {
            write!(f, " {}={}", q.kind(), q.values().join(","))?;
        }
        Ok(())
    }
}
