// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! # tl — Time log client argument parsing
//!
//! Turns the words after `tl <operation>` into a [`Command`]: the operation,
//! the selected tasks and the typed query [`Quantity`] values a server needs
//! to answer it. Nothing here performs I/O; "now" is always passed in.
//!
//! ## Command line shape
//!
//! ```text
//! tl <operation> [<task>[,<task>...] | :all] [:flag | :flag=value | :flag value]...
//! ```
//!
//! | Module         | Role |
//! |----------------|------|
//! | [`task`]       | Leading task list, `:all` sentinel, name validation. |
//! | [`param`]      | Flag registry and the left-to-right scan. |
//! | [`quantifier`] | Turns one flag argument into quantities. |
//! | [`temporal`]   | Date arithmetic for relative flags. |
//! | [`query`]      | The `query` flag table. |
//! | [`operation`]  | Operation table and help text. |
//! | [`config`]     | `TL_*` environment variables. |
//!
//! ```
//! use chrono::NaiveDate;
//! use tl::{Operations, Quantity};
//!
//! let now = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let ops = Operations::standard();
//! let query = ops.find("query").unwrap();
//! let args = vec!["coding".to_string(), ":last-year".to_string()];
//! let parsed = query.parser.parse(now, &args).unwrap();
//! assert_eq!(parsed.command.quantities(), &[Quantity::Year(2022)]);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod operation;
pub mod param;
pub mod parser;
pub mod quantifier;
pub mod quantity;
pub mod query;
pub mod task;
pub mod temporal;

pub use command::Command;
pub use config::Config;
pub use error::{ConfigError, ParseError};
pub use operation::{Operation, Operations};
pub use param::{ArgHandler, Handled, Param, ParamRegistry};
pub use parser::{CommandParser, Parsed};
pub use quantifier::Quantifier;
pub use quantity::{QueryParam, Quantity, QuantityKind, YearMonth};
pub use task::{TaskSelector, ALL_TASKS, FLAG_PREFIX};
pub use temporal::{Offset, TemporalDetail};
