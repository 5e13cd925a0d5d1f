// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Environment configuration.
//!
//! - `TL_LOG`: tracing filter directive, default `warn`.
//! - `TL_DEBUG`: if set, log at `debug` regardless of `TL_LOG`.
//! - `TL_NOW`: resolve queries as if it were this moment
//!   (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM[:SS]`).

use std::env;

use chrono::{Local, NaiveDateTime};

use crate::error::ConfigError;
use crate::quantity::parse_iso_date;

pub const ENV_LOG: &str = "TL_LOG";
pub const ENV_DEBUG: &str = "TL_DEBUG";
pub const ENV_NOW: &str = "TL_NOW";

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub now: Option<NaiveDateTime>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            now: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Builds a config from `(name, value)` pairs; unrelated names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        let mut debug = false;
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_LOG if !value.trim().is_empty() => config.log_filter = value.trim().to_string(),
                ENV_DEBUG => debug = true,
                ENV_NOW => config.now = Some(parse_now(value)?),
                _ => {}
            }
        }
        if debug {
            config.log_filter = "debug".to_string();
        }
        Ok(config)
    }

    /// The pinned moment, or the local wall clock.
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

fn parse_now(s: &str) -> Result<NaiveDateTime, ConfigError> {
    let s = s.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    parse_iso_date(s)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ConfigError::InvalidNow(s.to_string()))
}
