// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Error types for argument parsing and configuration.

use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used throughout the parsing engine.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything that can go wrong while turning tokens into a [`Command`](crate::Command).
///
/// A parse attempt fails with exactly one of these; no partial command is
/// returned alongside it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Missing argument for parameter: {0}")]
    MissingArgument(String),

    #[error("Require a task but none is given")]
    MissingTask,

    #[error("Require a single task but several are given: {0}")]
    AmbiguousTask(String),

    #[error("Require a single task name but found '{0}'")]
    ReservedTaskName(String),

    #[error("When given, '{0}' must be the only task")]
    MixedAllTasks(String),

    #[error("Invalid task name: {0:?}")]
    InvalidTaskName(String),

    #[error("Not a valid date: {0}")]
    InvalidDate(String),

    #[error("Not a valid year-month: {0}")]
    InvalidYearMonth(String),

    #[error("Not a four-digit year: {0}")]
    InvalidYear(String),

    #[error("Unbalanced modifiers: {given} given, expected a multiple of {arity}")]
    UnbalancedModifiers { given: usize, arity: usize },

    #[error("Not a number: {input}")]
    NumericParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Not a pair: {0}")]
    NotAPair(String),

    #[error("Offset out of range: {0}")]
    OffsetOutOfRange(u32),

    #[error("{flag}: {source}")]
    Param {
        flag: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the flag name an error was raised for.
    pub fn in_param(self, flag: &str) -> Self {
        Self::Param {
            flag: flag.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any flag context peeled off.
    pub fn root(&self) -> &ParseError {
        match self {
            Self::Param { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn numeric(input: &str, source: ParseIntError) -> Self {
        Self::NumericParse {
            input: input.to_string(),
            source,
        }
    }
}

/// Bad values in the process environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TL_NOW is not a valid date or date-time: {0}")]
    InvalidNow(String),
}
