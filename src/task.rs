// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Task selection: peels the task list off the front of a command's arguments.

use crate::error::{ParseError, Result};

/// Marks a token as a flag (`:today`, `:day=2024-01-31`) rather than a task.
pub const FLAG_PREFIX: char = ':';

/// Reserved "task" meaning every known task.
pub const ALL_TASKS: &str = ":all";

/// How many tasks a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSelector {
    /// No task; every token is left for the parameters.
    None,
    /// Exactly one real task.
    Single,
    /// A comma-separated list, or `:all` on its own.
    Multi,
}

impl TaskSelector {
    /// Splits `tokens` into the selected task names and the tokens left over.
    pub fn resolve<'a>(&self, tokens: &'a [String]) -> Result<(Vec<String>, &'a [String])> {
        match self {
            TaskSelector::None => Ok((Vec::new(), tokens)),
            TaskSelector::Single => {
                let (field, tasks, rest) = take_tasks(tokens)?;
                // Counted before duplicates collapse: `a,a` is two names.
                if field.split(',').count() > 1 {
                    return Err(ParseError::AmbiguousTask(field.to_string()));
                }
                if tasks.iter().any(|t| t == ALL_TASKS) {
                    return Err(ParseError::ReservedTaskName(ALL_TASKS.to_string()));
                }
                Ok((tasks, rest))
            }
            TaskSelector::Multi => {
                let (_, tasks, rest) = take_tasks(tokens)?;
                if tasks.len() > 1 && tasks.iter().any(|t| t == ALL_TASKS) {
                    return Err(ParseError::MixedAllTasks(ALL_TASKS.to_string()));
                }
                Ok((tasks, rest))
            }
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            TaskSelector::None => "",
            TaskSelector::Single => "<task>",
            TaskSelector::Multi => "<task>[,<task>...]|:all",
        }
    }
}

fn take_tasks(tokens: &[String]) -> Result<(&str, Vec<String>, &[String])> {
    let (first, rest) = tokens.split_first().ok_or(ParseError::MissingTask)?;
    Ok((first.as_str(), task_names(first)?, rest))
}

/// Splits a comma-separated task field and validates each name.
///
/// Duplicates collapse onto their first occurrence. `:all` is passed through
/// for the selector to judge. A lone flag or empty field counts as no task
/// at all; inside a list it is an invalid name.
pub fn task_names(field: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for (i, name) in field.split(',').enumerate() {
        if name == ALL_TASKS {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            continue;
        }
        if i == 0 && !field.contains(',') && (name.is_empty() || name.starts_with(FLAG_PREFIX)) {
            return Err(ParseError::MissingTask);
        }
        validate_task_name(name)?;
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Whether the given name is valid for a task: non-empty, no leading flag
/// prefix, no whitespace.
pub fn is_valid_task_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(FLAG_PREFIX) && !name.contains(char::is_whitespace)
}

pub fn validate_task_name(name: &str) -> Result<()> {
    if is_valid_task_name(name) {
        Ok(())
    } else {
        Err(ParseError::InvalidTaskName(name.to_string()))
    }
}
