// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Date arithmetic behind the query flags.
//!
//! Everything here is computed from a caller-supplied `now`, never from the
//! wall clock, so a query resolves the same way no matter when (or around
//! which midnight) it is evaluated.
//!
//! Weeks run Monday to Sunday. Ranges never extend past today. An offset
//! reaching before year 0000 is out of range.

use chrono::{Datelike, Days, Months, NaiveDateTime};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::quantity::{four_digit_year, parse_iso_date, Quantity, YearMonth, YEARS};

/// Lower bound used by `ever`.
pub const EPOCH: &str = "1970-01-01";

/// Pure resolver: `(now, modifiers) -> Quantity`. Always called with exactly
/// `arity` modifiers.
pub type ResolveFn = fn(NaiveDateTime, &[&str]) -> Result<Quantity>;

/// A fixed distance back from now, counted in whole calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
}

impl Offset {
    pub fn resolve(self, now: NaiveDateTime) -> Result<Quantity> {
        match self {
            Offset::Days(n) => days_ago(now, n),
            Offset::Weeks(n) => weeks_ago(now, n),
            Offset::Months(n) => months_ago(now, n),
            Offset::Years(n) => years_ago(now, n),
        }
    }
}

/// A temporal flag's resolver together with the number of modifiers it takes.
#[derive(Debug, Clone, Copy)]
pub struct TemporalDetail {
    pub arity: usize,
    pub usage: &'static str,
    pub resolve: ResolveFn,
}

impl TemporalDetail {
    pub const fn new(arity: usize, usage: &'static str, resolve: ResolveFn) -> Self {
        Self { arity, usage, resolve }
    }

    /// Resolves a comma-separated modifier list.
    ///
    /// The list is consumed `arity` fragments at a time, producing one
    /// quantity per chunk; a fragment count that is not a multiple of the
    /// arity is rejected. With arity 0 the argument is ignored.
    pub fn resolve_all(&self, now: NaiveDateTime, argument: &str) -> Result<Vec<Quantity>> {
        if self.arity == 0 {
            return Ok(vec![(self.resolve)(now, &[])?]);
        }
        let modifiers: Vec<&str> = argument.split(',').collect();
        if modifiers.len() % self.arity != 0 {
            return Err(ParseError::UnbalancedModifiers {
                given: modifiers.len(),
                arity: self.arity,
            });
        }
        debug!(chunks = modifiers.len() / self.arity, "resolving modifiers");
        modifiers
            .chunks(self.arity)
            .map(|chunk| (self.resolve)(now, chunk))
            .collect()
    }
}

pub const EVER: TemporalDetail = TemporalDetail::new(0, "", resolve_ever);
pub const DAY: TemporalDetail = TemporalDetail::new(1, "YYYY-MM-DD", resolve_day);
pub const MONTH: TemporalDetail = TemporalDetail::new(1, "YYYY-MM", resolve_month);
pub const YEAR: TemporalDetail = TemporalDetail::new(1, "YYYY", resolve_year);
pub const WEEKS_AGO: TemporalDetail = TemporalDetail::new(1, "N", resolve_weeks_ago);
pub const MONTHS_AGO: TemporalDetail = TemporalDetail::new(1, "N", resolve_months_ago);
pub const YEARS_AGO: TemporalDetail = TemporalDetail::new(1, "N", resolve_years_ago);
pub const SINCE: TemporalDetail = TemporalDetail::new(1, "YYYY-MM-DD", resolve_since);
pub const BETWEEN: TemporalDetail =
    TemporalDetail::new(2, "YYYY-MM-DD,YYYY-MM-DD", resolve_between);

fn resolve_ever(now: NaiveDateTime, _: &[&str]) -> Result<Quantity> {
    since(now, EPOCH)
}

fn resolve_day(_: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    Quantity::parse_day(one(mods)?)
}

fn resolve_month(_: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    Quantity::parse_month(one(mods)?)
}

fn resolve_year(_: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    Quantity::parse_year(one(mods)?)
}

fn resolve_weeks_ago(now: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    weeks_ago(now, offset(one(mods)?)?)
}

fn resolve_months_ago(now: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    months_ago(now, offset(one(mods)?)?)
}

fn resolve_years_ago(now: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    years_ago(now, offset(one(mods)?)?)
}

fn resolve_since(now: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    since(now, one(mods)?)
}

fn resolve_between(_: NaiveDateTime, mods: &[&str]) -> Result<Quantity> {
    match mods {
        [start, end] => Quantity::parse_between(start, end),
        _ => Err(ParseError::UnbalancedModifiers {
            given: mods.len(),
            arity: 2,
        }),
    }
}

fn one<'a>(mods: &[&'a str]) -> Result<&'a str> {
    match mods {
        [m] => Ok(*m),
        _ => Err(ParseError::UnbalancedModifiers {
            given: mods.len(),
            arity: 1,
        }),
    }
}

fn offset(m: &str) -> Result<u32> {
    m.parse::<u32>().map_err(|e| ParseError::numeric(m, e))
}

/// The day `days` before today.
pub fn days_ago(now: NaiveDateTime, days: u32) -> Result<Quantity> {
    now.date()
        .checked_sub_days(Days::new(days.into()))
        .and_then(four_digit_year)
        .map(Quantity::Day)
        .ok_or(ParseError::OffsetOutOfRange(days))
}

/// Monday to Sunday of the week `weeks` before the current one, the end clamped to today.
pub fn weeks_ago(now: NaiveDateTime, weeks: u32) -> Result<Quantity> {
    let today = now.date();
    let since_monday = u64::from(today.weekday().num_days_from_monday());
    let start = today
        .checked_sub_days(Days::new(since_monday + 7 * u64::from(weeks)))
        .and_then(four_digit_year)
        .ok_or(ParseError::OffsetOutOfRange(weeks))?;
    let end = start
        .checked_add_days(Days::new(6))
        .map_or(today, |sunday| sunday.min(today));
    Ok(Quantity::Between(start, end))
}

/// The calendar month `months` before the current one.
pub fn months_ago(now: NaiveDateTime, months: u32) -> Result<Quantity> {
    // Step back from the 1st: May 31st minus one month must land in April.
    YearMonth::of(now.date())
        .first_day()
        .checked_sub_months(Months::new(months))
        .and_then(four_digit_year)
        .map(|d| Quantity::Month(YearMonth::of(d)))
        .ok_or(ParseError::OffsetOutOfRange(months))
}

/// The calendar year `years` before the current one.
pub fn years_ago(now: NaiveDateTime, years: u32) -> Result<Quantity> {
    i32::try_from(years)
        .ok()
        .and_then(|n| now.year().checked_sub(n))
        .filter(|y| YEARS.contains(y))
        .map(Quantity::Year)
        .ok_or(ParseError::OffsetOutOfRange(years))
}

/// From `date` up to and including today.
pub fn since(now: NaiveDateTime, date: &str) -> Result<Quantity> {
    Ok(Quantity::Between(parse_iso_date(date)?, now.date()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(13, 45, 0).unwrap()
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(days_ago(at(2023, 3, 1), 0).unwrap(), Quantity::Day(date(2023, 3, 1)));
        assert_eq!(days_ago(at(2023, 3, 1), 1).unwrap(), Quantity::Day(date(2023, 2, 28)));
        assert_eq!(days_ago(at(2024, 3, 1), 1).unwrap(), Quantity::Day(date(2024, 2, 29)));
    }

    #[test]
    fn test_weeks_ago_midweek_clamps_to_today() {
        // 2023-06-14 is a Wednesday.
        let now = at(2023, 6, 14);
        assert_eq!(
            weeks_ago(now, 0).unwrap(),
            Quantity::Between(date(2023, 6, 12), date(2023, 6, 14))
        );
        assert_eq!(
            weeks_ago(now, 1).unwrap(),
            Quantity::Between(date(2023, 6, 5), date(2023, 6, 11))
        );
    }

    #[test]
    fn test_weeks_ago_on_monday_and_sunday() {
        assert_eq!(
            weeks_ago(at(2023, 6, 12), 0).unwrap(),
            Quantity::Between(date(2023, 6, 12), date(2023, 6, 12))
        );
        assert_eq!(
            weeks_ago(at(2023, 6, 18), 0).unwrap(),
            Quantity::Between(date(2023, 6, 12), date(2023, 6, 18))
        );
    }

    #[test]
    fn test_weeks_ago_crosses_year() {
        // 2024-01-03 is a Wednesday; its Monday is 2024-01-01.
        assert_eq!(
            weeks_ago(at(2024, 1, 3), 1).unwrap(),
            Quantity::Between(date(2023, 12, 25), date(2023, 12, 31))
        );
    }

    #[test]
    fn test_months_ago_does_not_overflow() {
        let now = at(2021, 5, 31);
        assert_eq!(months_ago(now, 1).unwrap().values(), vec!["2021-04"]);
        assert_eq!(months_ago(now, 0).unwrap().values(), vec!["2021-05"]);
        assert_eq!(months_ago(at(2021, 3, 31), 1).unwrap().values(), vec!["2021-02"]);
        assert_eq!(months_ago(at(2021, 1, 15), 1).unwrap().values(), vec!["2020-12"]);
        assert_eq!(months_ago(now, 13).unwrap().values(), vec!["2020-04"]);
    }

    #[test]
    fn test_years_ago() {
        let now = at(2023, 6, 15);
        assert_eq!(years_ago(now, 0).unwrap(), Quantity::Year(2023));
        assert_eq!(years_ago(now, 1).unwrap(), Quantity::Year(2022));
        assert!(matches!(years_ago(now, u32::MAX), Err(ParseError::OffsetOutOfRange(_))));
        assert_eq!(years_ago(now, 2023).unwrap(), Quantity::Year(0));
        assert_eq!(years_ago(now, 2024).unwrap_err(), ParseError::OffsetOutOfRange(2024));
        assert_eq!(years_ago(now, 3000).unwrap_err(), ParseError::OffsetOutOfRange(3000));
    }

    #[test]
    fn test_offsets_stop_at_year_zero() {
        let now = at(2023, 6, 15);
        assert_eq!(days_ago(now, 1_000_000).unwrap_err(), ParseError::OffsetOutOfRange(1_000_000));
        assert_eq!(weeks_ago(now, 200_000).unwrap_err(), ParseError::OffsetOutOfRange(200_000));
        assert_eq!(months_ago(now, 30_000).unwrap_err(), ParseError::OffsetOutOfRange(30_000));
        assert_eq!(months_ago(now, 2023 * 12 + 5).unwrap().values(), vec!["0000-01"]);
    }

    #[test]
    fn test_huge_offsets_are_out_of_range() {
        let now = at(2023, 6, 15);
        assert!(matches!(days_ago(now, u32::MAX), Err(ParseError::OffsetOutOfRange(_))));
        assert!(matches!(weeks_ago(now, u32::MAX), Err(ParseError::OffsetOutOfRange(_))));
        assert!(matches!(months_ago(now, u32::MAX), Err(ParseError::OffsetOutOfRange(_))));
    }

    #[test]
    fn test_since_and_ever() {
        let now = at(2023, 6, 15);
        assert_eq!(
            since(now, "2023-01-01").unwrap(),
            Quantity::Between(date(2023, 1, 1), date(2023, 6, 15))
        );
        assert!(matches!(since(now, "2023-1-1"), Err(ParseError::InvalidDate(_))));
        assert_eq!(
            EVER.resolve_all(now, "").unwrap(),
            vec![Quantity::Between(date(1970, 1, 1), date(2023, 6, 15))]
        );
    }

    #[test]
    fn test_between_chunks_pairs() {
        let got = BETWEEN
            .resolve_all(at(2023, 6, 15), "2020-01-01,2020-01-31,2020-02-01,2020-02-28")
            .unwrap();
        assert_eq!(
            got,
            vec![
                Quantity::Between(date(2020, 1, 1), date(2020, 1, 31)),
                Quantity::Between(date(2020, 2, 1), date(2020, 2, 28)),
            ]
        );
    }

    #[test]
    fn test_between_odd_count_is_unbalanced() {
        let err = BETWEEN
            .resolve_all(at(2023, 6, 15), "2020-01-01,2020-01-31,2020-02-01")
            .unwrap_err();
        assert_eq!(err, ParseError::UnbalancedModifiers { given: 3, arity: 2 });
    }

    #[test]
    fn test_single_modifier_chunks_each_fragment() {
        let got = DAY.resolve_all(at(2023, 6, 15), "2020-01-01,2020-01-02").unwrap();
        assert_eq!(
            got,
            vec![Quantity::Day(date(2020, 1, 1)), Quantity::Day(date(2020, 1, 2))]
        );
    }

    #[test]
    fn test_offset_modifiers_reject_non_numbers() {
        let now = at(2023, 6, 15);
        assert!(matches!(
            MONTHS_AGO.resolve_all(now, "three"),
            Err(ParseError::NumericParse { input, .. }) if input == "three"
        ));
        assert!(matches!(YEARS_AGO.resolve_all(now, "-1"), Err(ParseError::NumericParse { .. })));
        assert_eq!(MONTHS_AGO.resolve_all(now, "3").unwrap(), vec![months_ago(now, 3).unwrap()]);
        assert_eq!(WEEKS_AGO.resolve_all(now, "1").unwrap(), vec![weeks_ago(now, 1).unwrap()]);
    }

    #[test]
    fn test_month_and_year_modifiers() {
        let now = at(2023, 6, 15);
        assert_eq!(MONTH.resolve_all(now, "2022-11").unwrap()[0].values(), vec!["2022-11"]);
        assert!(matches!(MONTH.resolve_all(now, "2022-13"), Err(ParseError::InvalidYearMonth(_))));
        assert_eq!(YEAR.resolve_all(now, "2019").unwrap(), vec![Quantity::Year(2019)]);
    }

    #[test]
    fn test_offset_resolve_dispatch() {
        let now = at(2023, 6, 15);
        assert_eq!(Offset::Days(1).resolve(now).unwrap(), Quantity::Day(date(2023, 6, 14)));
        assert_eq!(Offset::Years(1).resolve(now).unwrap(), Quantity::Year(2022));
        assert_eq!(Offset::Months(1).resolve(now).unwrap().values(), vec!["2023-05"]);
        assert_eq!(Offset::Weeks(0).resolve(now).unwrap(), weeks_ago(now, 0).unwrap());
    }

    proptest! {
        #[test]
        fn this_week_starts_monday_and_never_passes_today(days in 0i64..80_000) {
            let today = date(1900, 1, 1) + chrono::Duration::days(days);
            let now = today.and_hms_opt(23, 59, 59).unwrap();
            match weeks_ago(now, 0).unwrap() {
                Quantity::Between(start, end) => {
                    prop_assert_eq!(start.weekday(), Weekday::Mon);
                    prop_assert!(start <= today);
                    prop_assert!((today - start).num_days() < 7);
                    prop_assert_eq!(end, today.min(start + chrono::Duration::days(6)));
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }

        #[test]
        fn months_ago_steps_back_whole_months(days in 0i64..80_000, n in 0u32..240) {
            let today = date(1900, 1, 1) + chrono::Duration::days(days);
            let now = today.and_hms_opt(0, 0, 0).unwrap();
            match months_ago(now, n).unwrap() {
                Quantity::Month(ym) => {
                    let total = |y: i32, m: u32| i64::from(y) * 12 + i64::from(m);
                    prop_assert_eq!(
                        total(today.year(), today.month()) - total(ym.year(), ym.month()),
                        i64::from(n)
                    );
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }
}
