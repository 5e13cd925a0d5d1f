// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! Quantifiers turn a flag's argument string into [`Quantity`] values.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{ParseError, Result};
use crate::quantity::Quantity;
use crate::temporal::{Offset, TemporalDetail};

/// How a parameter's argument is read.
#[derive(Debug, Clone)]
pub enum Quantifier {
    /// Ignores the argument; a fixed distance back from now.
    Fixed(Offset),
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY`
    Year,
    /// Comma-separated list of the inner quantifier.
    List(Box<Quantifier>),
    /// Two values of the inner quantifier joined by `:`, read as the range
    /// from the start of the first to the end of the second.
    Pair(Box<Quantifier>),
    /// A temporal flag resolver taking `arity` modifiers per quantity.
    Detail(TemporalDetail),
}

impl Quantifier {
    pub fn list_of(elem: Quantifier) -> Self {
        Quantifier::List(Box::new(elem))
    }

    pub fn pair_of(elem: Quantifier) -> Self {
        Quantifier::Pair(Box::new(elem))
    }

    /// Number of argument fragments consumed per quantity; 0 means the
    /// parameter takes no argument at all.
    pub fn arity(&self) -> usize {
        match self {
            Quantifier::Fixed(_) => 0,
            Quantifier::Date | Quantifier::YearMonth | Quantifier::Year => 1,
            Quantifier::List(elem) => elem.arity(),
            Quantifier::Pair(_) => 2,
            Quantifier::Detail(detail) => detail.arity,
        }
    }

    pub fn parse(&self, now: NaiveDateTime, argument: &str) -> Result<Vec<Quantity>> {
        match self {
            Quantifier::Fixed(offset) => Ok(vec![offset.resolve(now)?]),
            Quantifier::Date => Ok(vec![Quantity::parse_day(argument)?]),
            Quantifier::YearMonth => Ok(vec![Quantity::parse_month(argument)?]),
            Quantifier::Year => Ok(vec![Quantity::parse_year(argument)?]),
            Quantifier::List(elem) => {
                let mut out = Vec::new();
                for part in argument.split(',') {
                    out.extend(elem.parse(now, part)?);
                }
                Ok(out)
            }
            Quantifier::Pair(elem) => {
                let (first, second) = match argument.split(':').collect::<Vec<_>>()[..] {
                    [a, b] => (a, b),
                    _ => return Err(ParseError::NotAPair(argument.to_string())),
                };
                let start = single_span(elem, now, first)?.0;
                let end = single_span(elem, now, second)?.1;
                Ok(vec![Quantity::Between(start, end)])
            }
            Quantifier::Detail(detail) => detail.resolve_all(now, argument),
        }
    }

    /// Usage placeholder for help output.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn single_span(
    elem: &Quantifier,
    now: NaiveDateTime,
    fragment: &str,
) -> Result<(chrono::NaiveDate, chrono::NaiveDate)> {
    match elem.parse(now, fragment)?[..] {
        [q] => q
            .span()
            .ok_or_else(|| ParseError::InvalidDate(fragment.to_string())),
        _ => Err(ParseError::NotAPair(fragment.to_string())),
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Fixed(_) => Ok(()),
            Quantifier::Date => f.write_str("YYYY-MM-DD"),
            Quantifier::YearMonth => f.write_str("YYYY-MM"),
            Quantifier::Year => f.write_str("YYYY"),
            Quantifier::List(elem) => write!(f, "{},...", elem),
            Quantifier::Pair(elem) => write!(f, "{0}:{0}", elem),
            Quantifier::Detail(detail) => f.write_str(detail.usage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::BETWEEN;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2023, 6, 15).and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_ignores_argument() {
        let q = Quantifier::Fixed(Offset::Days(1));
        assert_eq!(q.arity(), 0);
        assert_eq!(q.parse(now(), "").unwrap(), vec![Quantity::Day(date(2023, 6, 14))]);
    }

    #[test]
    fn test_raw_quantifiers() {
        assert_eq!(
            Quantifier::Date.parse(now(), "2020-02-29").unwrap(),
            vec![Quantity::Day(date(2020, 2, 29))]
        );
        assert!(matches!(
            Quantifier::Date.parse(now(), "2020-02-30"),
            Err(ParseError::InvalidDate(_))
        ));
        assert!(matches!(
            Quantifier::YearMonth.parse(now(), "2020-2"),
            Err(ParseError::InvalidYearMonth(_))
        ));
        assert_eq!(Quantifier::Year.parse(now(), "1999").unwrap(), vec![Quantity::Year(1999)]);
    }

    #[test]
    fn test_list_parses_every_element() {
        let q = Quantifier::list_of(Quantifier::YearMonth);
        let got = q.parse(now(), "2023-01,2023-02").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].values(), vec!["2023-02"]);
        assert!(matches!(q.parse(now(), "2023-01,nope"), Err(ParseError::InvalidYearMonth(s)) if s == "nope"));
    }

    #[test]
    fn test_pair_of_dates() {
        let q = Quantifier::pair_of(Quantifier::Date);
        assert_eq!(
            q.parse(now(), "2020-01-01:2020-01-31").unwrap(),
            vec![Quantity::Between(date(2020, 1, 1), date(2020, 1, 31))]
        );
        assert!(matches!(q.parse(now(), "2020-01-01"), Err(ParseError::NotAPair(_))));
        assert!(matches!(q.parse(now(), "a:b:c"), Err(ParseError::NotAPair(_))));
    }

    #[test]
    fn test_pair_of_months_spans_whole_months() {
        let q = Quantifier::pair_of(Quantifier::YearMonth);
        assert_eq!(
            q.parse(now(), "2024-01:2024-02").unwrap(),
            vec![Quantity::Between(date(2024, 1, 1), date(2024, 2, 29))]
        );
    }

    #[test]
    fn test_list_of_pairs() {
        let q = Quantifier::list_of(Quantifier::pair_of(Quantifier::Date));
        let got = q.parse(now(), "2020-01-01:2020-01-02,2020-03-01:2020-03-02").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1], Quantity::Between(date(2020, 3, 1), date(2020, 3, 2)));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Quantifier::list_of(Quantifier::Date).describe(), "YYYY-MM-DD,...");
        assert_eq!(Quantifier::pair_of(Quantifier::YearMonth).describe(), "YYYY-MM:YYYY-MM");
        assert_eq!(Quantifier::Detail(BETWEEN).describe(), "YYYY-MM-DD,YYYY-MM-DD");
        assert_eq!(Quantifier::Fixed(Offset::Weeks(0)).describe(), "");
    }

    #[test]
    fn test_detail_arity() {
        assert_eq!(Quantifier::Detail(BETWEEN).arity(), 2);
        assert_eq!(Quantifier::list_of(Quantifier::Date).arity(), 1);
    }
}
