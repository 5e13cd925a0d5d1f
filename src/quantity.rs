// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Typed query information: a day, a month, a year or a range of days.
//!
//! Every value is validated when it is built; the string form handed to the
//! server is derived from the typed payload with [`Quantity::values`].

use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;

use crate::error::{ParseError, Result};

/// `chrono` format of an ISO date.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Years that render as `yyyy`.
pub const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn iso_date_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static pattern"))
}

fn year_month_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("static pattern"))
}

/// Parses a strict `YYYY-MM-DD` date. Unpadded fields and impossible days are rejected.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    if !iso_date_shape().is_match(s) {
        return Err(ParseError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, ISO_DATE).map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Formats as `YYYY-MM-DD`.
pub fn iso_date(d: NaiveDate) -> String {
    d.format(ISO_DATE).to_string()
}

/// `date`, if its year renders as four digits.
pub fn four_digit_year(date: NaiveDate) -> Option<NaiveDate> {
    YEARS.contains(&date.year()).then_some(date)
}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 exists in every month.
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Parses a strict `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || ParseError::InvalidYearMonth(s.to_string());
        let caps = year_month_shape().captures(s).ok_or_else(invalid)?;
        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Last day of the month; `None` only at the very end of chrono's calendar.
    pub fn last_day(self) -> Option<NaiveDate> {
        self.0.checked_add_months(Months::new(1))?.pred_opt()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// The kind tag of a [`Quantity`], as the server names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Day,
    Month,
    Year,
    Between,
}

impl QuantityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuantityKind::Day => "day",
            QuantityKind::Month => "month",
            QuantityKind::Year => "year",
            QuantityKind::Between => "between",
        }
    }

    /// Number of values a quantity of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            QuantityKind::Between => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated piece of query information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// A single day.
    Day(NaiveDate),
    /// A full calendar month.
    Month(YearMonth),
    /// A full calendar year.
    Year(i32),
    /// Inclusive range of days.
    Between(NaiveDate, NaiveDate),
}

/// The server-side name for a [`Quantity`] used as a query parameter.
pub type QueryParam = Quantity;

impl Quantity {
    pub fn parse_day(s: &str) -> Result<Self> {
        parse_iso_date(s).map(Quantity::Day)
    }

    pub fn parse_month(s: &str) -> Result<Self> {
        YearMonth::parse(s).map(Quantity::Month)
    }

    pub fn parse_year(s: &str) -> Result<Self> {
        let year = s.parse::<i32>().map_err(|e| ParseError::numeric(s, e))?;
        if !YEARS.contains(&year) {
            return Err(ParseError::InvalidYear(s.to_string()));
        }
        Ok(Quantity::Year(year))
    }

    pub fn parse_between(start: &str, end: &str) -> Result<Self> {
        Ok(Quantity::Between(parse_iso_date(start)?, parse_iso_date(end)?))
    }

    pub fn kind(&self) -> QuantityKind {
        match self {
            Quantity::Day(_) => QuantityKind::Day,
            Quantity::Month(_) => QuantityKind::Month,
            Quantity::Year(_) => QuantityKind::Year,
            Quantity::Between(..) => QuantityKind::Between,
        }
    }

    /// String values in server order; the length always equals `kind().arity()`.
    pub fn values(&self) -> Vec<String> {
        match self {
            Quantity::Day(d) => vec![iso_date(*d)],
            Quantity::Month(m) => vec![m.to_string()],
            Quantity::Year(y) => vec![format!("{:04}", y)],
            Quantity::Between(a, b) => vec![iso_date(*a), iso_date(*b)],
        }
    }

    /// First and last day covered, or `None` for years outside chrono's calendar.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Quantity::Day(d) => Some((d, d)),
            Quantity::Month(m) => Some((m.first_day(), m.last_day()?)),
            Quantity::Year(y) => Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            )),
            Quantity::Between(a, b) => Some((a, b)),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        for v in self.values() {
            write!(f, " {}", v)?;
        }
        Ok(())
    }
}
