// Copyright (c) 2025 Robert August Vincent II <pillarsdotnet@gmail.com>
// Co-author: Cursor-AI.

//! The query language: which period(s) to report time for.
//!
//! | Flag              | Result |
//! |-------------------|--------|
//! | `:today`          | today |
//! | `:yesterday`      | yesterday |
//! | `:this-week`      | Monday of this week up to today |
//! | `:last-week`      | Monday to Sunday of last week |
//! | `:this-month`     | this month |
//! | `:last-month`     | last month |
//! | `:this-year`      | this year |
//! | `:last-year`      | last year |
//! | `:ever`           | 1970-01-01 up to today |
//! | `:day=D`          | the day `D` |
//! | `:month=M`        | the month `M` (`YYYY-MM`) |
//! | `:year=Y`         | the year `Y` |
//! | `:weeks-ago=N`    | the week `N` weeks back |
//! | `:months-ago=N`   | the month `N` months back |
//! | `:years-ago=N`    | the year `N` years back |
//! | `:since=D`        | `D` up to today |
//! | `:between=D1,D2`  | `D1` to `D2` |
//! | `:range=D1:D2`    | `D1` to `D2` |
//!
//! Modifier lists repeat: `:day=D1,D2` asks for two days and
//! `:between=A,B,C,D` for two ranges. Without any flag, a query covers today.

use crate::param::{Param, ParamRegistry};
use crate::quantifier::Quantifier;
use crate::temporal::{self, Offset};

pub const PRM_TODAY: &str = "today";
pub const PRM_YESTERDAY: &str = "yesterday";
pub const PRM_THIS_WEEK: &str = "this-week";
pub const PRM_LAST_WEEK: &str = "last-week";
pub const PRM_THIS_MONTH: &str = "this-month";
pub const PRM_LAST_MONTH: &str = "last-month";
pub const PRM_THIS_YEAR: &str = "this-year";
pub const PRM_LAST_YEAR: &str = "last-year";
pub const PRM_EVER: &str = "ever";
pub const PRM_DAY: &str = "day";
pub const PRM_MONTH: &str = "month";
pub const PRM_YEAR: &str = "year";
pub const PRM_WEEKS_AGO: &str = "weeks-ago";
pub const PRM_MONTHS_AGO: &str = "months-ago";
pub const PRM_YEARS_AGO: &str = "years-ago";
pub const PRM_SINCE: &str = "since";
pub const PRM_BETWEEN: &str = "between";
pub const PRM_RANGE: &str = "range";

/// Registry for the `query` operation.
pub fn query_params() -> ParamRegistry {
    let fixed = |offset| Quantifier::Fixed(offset);
    let detail = Quantifier::Detail;
    ParamRegistry::new()
        .with(Param::new(PRM_TODAY, fixed(Offset::Days(0)), "Today's activity"))
        .with(Param::new(PRM_YESTERDAY, fixed(Offset::Days(1)), "Yesterday's activity"))
        .with(Param::new(PRM_THIS_WEEK, fixed(Offset::Weeks(0)), "This week's activity"))
        .with(Param::new(PRM_LAST_WEEK, fixed(Offset::Weeks(1)), "Last week's activity"))
        .with(Param::new(PRM_THIS_MONTH, fixed(Offset::Months(0)), "This month's activity"))
        .with(Param::new(PRM_LAST_MONTH, fixed(Offset::Months(1)), "Last month's activity"))
        .with(Param::new(PRM_THIS_YEAR, fixed(Offset::Years(0)), "This year's activity"))
        .with(Param::new(PRM_LAST_YEAR, fixed(Offset::Years(1)), "Last year's activity"))
        .with(Param::new(PRM_EVER, detail(temporal::EVER), "All recorded activity"))
        .with(Param::new(PRM_DAY, detail(temporal::DAY), "Activity on the given day(s)"))
        .with(Param::new(PRM_MONTH, detail(temporal::MONTH), "Activity in the given month(s)"))
        .with(Param::new(PRM_YEAR, detail(temporal::YEAR), "Activity in the given year(s)"))
        .with(Param::new(PRM_WEEKS_AGO, detail(temporal::WEEKS_AGO), "Activity N weeks ago"))
        .with(Param::new(PRM_MONTHS_AGO, detail(temporal::MONTHS_AGO), "Activity N months ago"))
        .with(Param::new(PRM_YEARS_AGO, detail(temporal::YEARS_AGO), "Activity N years ago"))
        .with(Param::new(PRM_SINCE, detail(temporal::SINCE), "Activity since the given day"))
        .with(Param::new(PRM_BETWEEN, detail(temporal::BETWEEN), "Activity between two days"))
        .with(Param::new(
            PRM_RANGE,
            Quantifier::list_of(Quantifier::pair_of(Quantifier::Date)),
            "Activity within each FROM:TO range",
        ))
        .with_fallback(fixed(Offset::Days(0)))
}
