//! Actual/Actual day count conventions.

use super::{days_per_year, is_leap_year, oriented, DayCount};
use super::{THREE_SIXTY_FIVE_DAYS, THREE_SIXTY_SIX_DAYS};
use crate::types::Date;

/// Actual/Actual day count convention (ISDA style).
///
/// The year fraction is calculated by splitting the period into the
/// portions that fall in leap years and in common years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
///
/// Complete calendar years in between contribute exactly one each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl ActAct {
    fn magnitude(from: Date, to: Date) -> f64 {
        let (from_year, to_year) = (from.year(), to.year());
        if from_year == to_year {
            return from.days_between(&to) as f64 / days_per_year(from_year);
        }

        let first_fraction =
            from.days_between(&from.start_of_next_year()) as f64 / days_per_year(from_year);
        let last_fraction = to.start_of_year().days_between(&to) as f64 / days_per_year(to_year);

        first_fraction + last_fraction + f64::from(to_year - from_year - 1)
    }
}

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ActualActual"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, Self::magnitude)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, |from, to| from.days_between(&to))
    }
}

/// Actual/Actual AFB day count convention.
///
/// Full years are counted backwards from the later date. The remaining stub
/// uses the actual number of days over 365, or 366 when February 29th falls
/// inside the stub.
///
/// Stepping back from February 29th lands on February 28th; stepping back
/// onto February 28th of a leap year moves the anchor to February 29th.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActAfb;

impl ActActAfb {
    fn magnitude(from: Date, to: Date) -> f64 {
        let mut full_years = 0_u32;
        let mut remaining = to;
        let mut anchor = to;

        while anchor > from {
            anchor = match anchor.add_years(-1) {
                Ok(previous) => previous,
                Err(_) => break,
            };
            if anchor.month() == 2 && anchor.day() == 28 && anchor.is_leap_year() {
                anchor = anchor.add_days(1);
            }

            if anchor >= from {
                full_years += 1;
                remaining = anchor;
            }
        }

        f64::from(full_years) + from.days_between(&remaining) as f64 / stub_basis(from, remaining)
    }
}

/// 366 if a February 29th lies in `[from, remaining)`, else 365.
fn stub_basis(from: Date, remaining: Date) -> f64 {
    let contains_leap_day = |year: i32| {
        is_leap_year(year)
            && Date::from_ymd(year, 2, 29)
                .map(|leap_day| from <= leap_day && leap_day < remaining)
                .unwrap_or(false)
    };

    if contains_leap_day(remaining.year()) || contains_leap_day(from.year()) {
        THREE_SIXTY_SIX_DAYS
    } else {
        THREE_SIXTY_FIVE_DAYS
    }
}

impl DayCount for ActActAfb {
    fn name(&self) -> &'static str {
        "ActualActualAFB"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, Self::magnitude)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, |from, to| from.days_between(&to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_actact_same_year() {
        let dc = ActAct;
        assert_relative_eq!(
            dc.year_fraction(d(2019, 1, 1), d(2019, 7, 1)),
            181.0 / 365.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2019, 7, 1), d(2019, 1, 1)),
            -181.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_actact_whole_years() {
        let dc = ActAct;
        assert_eq!(dc.year_fraction(d(2019, 1, 1), d(2020, 1, 1)), 1.0);
        assert_eq!(dc.year_fraction(d(2020, 1, 1), d(2021, 1, 1)), 1.0);
        assert_eq!(dc.year_fraction(d(2019, 1, 1), d(2021, 1, 1)), 2.0);
        assert_relative_eq!(
            dc.year_fraction(d(2016, 3, 4), d(2116, 3, 4)),
            100.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_actact_split_across_years() {
        let dc = ActAct;
        assert_relative_eq!(
            dc.year_fraction(d(2019, 3, 4), d(2023, 6, 1)),
            303.0 / 365.0 + 3.0 + 151.0 / 365.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2020, 2, 10), d(2021, 7, 2)),
            326.0 / 366.0 + 182.0 / 365.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2016, 3, 4), d(2023, 6, 1)),
            303.0 / 366.0 + 6.0 + 151.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_actact_inverted_dates() {
        assert_relative_eq!(
            ActAct.year_fraction(d(2018, 7, 31), d(2018, 1, 1)),
            -211.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_stub_without_leap_day() {
        let dc = ActActAfb;
        assert_relative_eq!(
            dc.year_fraction(d(2007, 12, 28), d(2008, 2, 28)),
            62.0 / 365.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2012, 12, 28), d(2013, 2, 28)),
            62.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_ending_on_leap_day() {
        // The leap day is the end of the stub, not inside it
        assert_relative_eq!(
            ActActAfb.year_fraction(d(2007, 12, 28), d(2008, 2, 29)),
            63.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_full_years_and_stub() {
        let dc = ActActAfb;
        assert_relative_eq!(
            dc.year_fraction(d(2007, 10, 31), d(2008, 11, 30)),
            1.0 + 30.0 / 365.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2008, 2, 1), d(2009, 5, 31)),
            1.0 + 120.0 / 366.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2012, 2, 28), d(2015, 1, 28)),
            2.0 + 335.0 / 366.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_leap_day_inside_stub() {
        let dc = ActActAfb;
        assert_relative_eq!(
            dc.year_fraction(d(1996, 2, 1), d(1997, 1, 1)),
            (366.0 - 31.0) / 366.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2004, 2, 28), d(2004, 3, 2)),
            3.0 / 366.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_anchor_moves_to_leap_day() {
        // 2009-02-28 steps back to 2008-02-28, which becomes 2008-02-29.
        // The one-day stub ends on the leap day so it stays on a 365 basis.
        let dc = ActActAfb;
        assert_relative_eq!(
            dc.year_fraction(d(2008, 2, 29), d(2009, 2, 28)),
            1.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            dc.year_fraction(d(2008, 2, 28), d(2009, 2, 28)),
            1.0 + 1.0 / 365.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_afb_negative() {
        let dc = ActActAfb;
        let forward = dc.year_fraction(d(2012, 2, 28), d(2015, 1, 28));
        assert_eq!(dc.year_fraction(d(2015, 1, 28), d(2012, 2, 28)), -forward);
    }
}
