// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Parameters: the `:flag` / `:flag=value` part of a command line.
//!
//! A [`ParamRegistry`] maps flag names to their [`Param`]. It is built once
//! when an operation is registered and only read afterwards. Scanning is
//! fail-fast on unknown flags and bad values; plain words are handed back as
//! unused so the caller can warn about them.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::quantifier::Quantifier;
use crate::quantity::Quantity;
use crate::task::FLAG_PREFIX;

/// One recognised flag.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub requires_arg: bool,
    pub quantifier: Quantifier,
    pub description: String,
}

impl Param {
    /// A flag whose need for an argument follows from its quantifier's arity.
    pub fn new(name: &str, quantifier: Quantifier, description: &str) -> Self {
        Self {
            name: name.to_string(),
            requires_arg: quantifier.arity() > 0,
            quantifier,
            description: description.to_string(),
        }
    }

    /// `:name` or `:name=USAGE`, as shown in help output.
    pub fn synopsis(&self) -> String {
        if self.requires_arg {
            format!("{}{}={}", FLAG_PREFIX, self.name, self.quantifier.describe())
        } else {
            format!("{}{}", FLAG_PREFIX, self.name)
        }
    }
}

/// Tokens the scan did not consume, plus everything it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handled {
    pub unused: Vec<String>,
    pub quantities: Vec<Quantity>,
}

/// Flags recognised by one operation, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ParamRegistry {
    params: Vec<Param>,
    index: HashMap<String, usize>,
    fallback: Option<Quantifier>,
}

impl ParamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag.
    ///
    /// # Panics
    ///
    /// If a flag of the same name is already registered; that is a bug in the
    /// operation's setup, not bad input.
    pub fn register(&mut self, param: Param) {
        if self.index.contains_key(&param.name) {
            panic!("Duplicate parameter name: {}", param.name);
        }
        self.index.insert(param.name.clone(), self.params.len());
        self.params.push(param);
    }

    pub fn with(mut self, param: Param) -> Self {
        self.register(param);
        self
    }

    /// Quantifier applied with an empty argument when a scan yields nothing.
    pub fn with_fallback(mut self, quantifier: Quantifier) -> Self {
        self.fallback = Some(quantifier);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Param> {
        self.index.get(name).map(|&i| &self.params[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Scans `tokens` left to right.
    ///
    /// A flag needing an argument takes it from its `=value` suffix, or else
    /// from the following token, which is then skipped.
    pub fn handle(&self, now: NaiveDateTime, tokens: &[String]) -> Result<Handled> {
        let mut out = Handled::default();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            let Some(flag) = token.strip_prefix(FLAG_PREFIX) else {
                out.unused.push(token.clone());
                i += 1;
                continue;
            };
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            let param = self
                .get(name)
                .ok_or_else(|| ParseError::UnknownParameter(name.to_string()))?;

            let argument = if param.requires_arg {
                match inline {
                    Some("") => return Err(ParseError::MissingArgument(name.to_string())),
                    Some(value) => value,
                    None => match tokens.get(i + 1) {
                        Some(next) if !next.starts_with(FLAG_PREFIX) => {
                            i += 1;
                            next.as_str()
                        }
                        _ => return Err(ParseError::MissingArgument(name.to_string())),
                    },
                }
            } else {
                if let Some(value) = inline.filter(|v| !v.is_empty()) {
                    out.unused.push(value.to_string());
                }
                ""
            };

            debug!(param = name, argument, "resolving parameter");
            let quantities = param
                .quantifier
                .parse(now, argument)
                .map_err(|e| e.in_param(name))?;
            out.quantities.extend(quantities);
            i += 1;
        }

        if out.quantities.is_empty() {
            if let Some(fallback) = &self.fallback {
                out.quantities = fallback.parse(now, "")?;
            }
        }
        Ok(out)
    }
}

/// What an operation does with the tokens left after task selection.
#[derive(Debug, Clone)]
pub enum ArgHandler {
    /// Takes no parameters; every token is unused.
    NoParams,
    Params(ParamRegistry),
}

impl ArgHandler {
    pub fn handle(&self, now: NaiveDateTime, tokens: &[String]) -> Result<Handled> {
        match self {
            ArgHandler::NoParams => Ok(Handled {
                unused: tokens.to_vec(),
                quantities: Vec::new(),
            }),
            ArgHandler::Params(registry) => registry.handle(now, tokens),
        }
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> {
        let params: &[Param] = match self {
            ArgHandler::NoParams => &[],
            ArgHandler::Params(registry) => &registry.params,
        };
        params.iter()
    }
}
