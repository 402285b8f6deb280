//! Validation Test Suite
//!
//! Cross-convention checks: the worked examples every convention must
//! reproduce, and the algebraic properties shared by all of them.

#[cfg(test)]
mod worked_examples {
    use crate::daycounts::{year_fraction, Convention};
    use crate::types::Date;
    use approx::assert_relative_eq;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn check(from: Date, to: Date, expected: &[(Convention, f64)]) {
        for &(convention, value) in expected {
            assert_relative_eq!(
                year_fraction(from, to, convention),
                value,
                max_relative = 1e-15
            );
        }
    }

    // =========================================================================
    // Year-end into February of a leap year
    // =========================================================================

    #[test]
    fn test_dec28_to_feb28_leap_year() {
        check(
            d(2007, 12, 28),
            d(2008, 2, 28),
            &[
                (Convention::ActualActualAFB, 62.0 / 365.0),
                (Convention::ActualThreeSixty, 62.0 / 360.0),
                (Convention::ActualThreeSixtyFiveFixed, 62.0 / 365.0),
                (Convention::ThirtyThreeSixtyUS, 60.0 / 360.0),
                (Convention::ThirtyThreeSixtyEuropean, 60.0 / 360.0),
                (Convention::ThirtyThreeSixtyItalian, 62.0 / 360.0),
                (Convention::ThirtyThreeSixtyGerman, 60.0 / 360.0),
            ],
        );
    }

    #[test]
    fn test_dec28_to_leap_day() {
        check(
            d(2007, 12, 28),
            d(2008, 2, 29),
            &[
                (Convention::ActualActualAFB, 63.0 / 365.0),
                (Convention::ActualThreeSixty, 63.0 / 360.0),
                (Convention::ActualThreeSixtyFiveFixed, 63.0 / 365.0),
                (Convention::ThirtyThreeSixtyUS, 61.0 / 360.0),
                (Convention::ThirtyThreeSixtyEuropean, 61.0 / 360.0),
                (Convention::ThirtyThreeSixtyItalian, 62.0 / 360.0),
                (Convention::ThirtyThreeSixtyGerman, 62.0 / 360.0),
            ],
        );
    }

    // =========================================================================
    // Month-end to month-end, longer than a year
    // =========================================================================

    #[test]
    fn test_oct31_to_nov30_next_year() {
        check(
            d(2007, 10, 31),
            d(2008, 11, 30),
            &[
                (Convention::ActualActualAFB, 1.0 + 30.0 / 365.0),
                (Convention::ActualThreeSixty, 396.0 / 360.0),
                (Convention::ActualThreeSixtyFiveFixed, 396.0 / 365.0),
                (Convention::ThirtyThreeSixtyUS, 390.0 / 360.0),
                (Convention::ThirtyThreeSixtyEuropean, 390.0 / 360.0),
                (Convention::ThirtyThreeSixtyItalian, 390.0 / 360.0),
                (Convention::ThirtyThreeSixtyGerman, 390.0 / 360.0),
            ],
        );
    }

    #[test]
    fn test_feb1_to_may31_next_year() {
        check(
            d(2007, 2, 1),
            d(2008, 5, 31),
            &[
                (Convention::ActualThreeSixty, 485.0 / 360.0),
                (Convention::ActualThreeSixtyFiveFixed, 485.0 / 365.0),
                (Convention::ThirtyThreeSixtyUS, 480.0 / 360.0),
                (Convention::ThirtyThreeSixtyEuropean, 479.0 / 360.0),
                (Convention::ThirtyThreeSixtyItalian, 479.0 / 360.0),
                (Convention::ThirtyThreeSixtyGerman, 479.0 / 360.0),
            ],
        );
    }

    #[test]
    fn test_act360_and_act365_same_pair() {
        check(
            d(2018, 1, 1),
            d(2018, 7, 31),
            &[
                (Convention::ActualThreeSixty, 211.0 / 360.0),
                (Convention::ActualThreeSixtyFiveFixed, 211.0 / 365.0),
            ],
        );
    }
}

#[cfg(test)]
mod property_tests {
    use crate::daycounts::{convention_name, year_fraction, year_fraction_for_code, Convention};
    use crate::types::Date;
    use proptest::prelude::*;

    // 1600-01-01 to 2399-12-31, spanning the 1700/1800/1900/2100/2200/2300
    // common years and the 2000 leap year
    fn date_strategy() -> impl Strategy<Value = Date> {
        (0_i64..292_194).prop_map(|offset| Date::from_ymd(1600, 1, 1).unwrap().add_days(offset))
    }

    fn convention_strategy() -> impl Strategy<Value = Convention> {
        prop::sample::select(Convention::all().to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn year_fraction_is_antisymmetric(
            a in date_strategy(),
            b in date_strategy(),
            convention in convention_strategy(),
        ) {
            let forward = year_fraction(a, b, convention);
            let backward = year_fraction(b, a, convention);
            prop_assert_eq!(forward, -backward);
        }

        #[test]
        fn equal_dates_give_zero(
            date in date_strategy(),
            convention in convention_strategy(),
        ) {
            prop_assert_eq!(year_fraction(date, date, convention), 0.0);
        }

        #[test]
        fn ordered_dates_give_non_negative_fractions(
            a in date_strategy(),
            b in date_strategy(),
            convention in convention_strategy(),
        ) {
            let (from, to) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(year_fraction(from, to, convention) >= 0.0);
        }

        #[test]
        fn unsupported_codes_fall_back_to_actual_actual(
            a in date_strategy(),
            b in date_strategy(),
            code in prop_oneof![i64::MIN..0_i64, 8_i64..i64::MAX],
        ) {
            prop_assert_eq!(convention_name(code), "Unsupported");
            prop_assert_eq!(
                year_fraction_for_code(a, b, code),
                year_fraction(a, b, Convention::ActualActual)
            );
        }

        #[test]
        fn actual_actual_counts_whole_years_exactly(
            date in date_strategy(),
            years in 1_i32..40,
        ) {
            let start = date.start_of_year();
            let end = start.add_years(years).unwrap();
            let yf = year_fraction(start, end, Convention::ActualActual);
            prop_assert!((yf - f64::from(years)).abs() < 1e-12);
        }

        #[test]
        fn centuries_apart_track_the_calendar_year_gap(
            a in date_strategy(),
            b in date_strategy(),
            convention in convention_strategy(),
        ) {
            let (from, to) = if a <= b { (a, b) } else { (b, a) };
            let yf = year_fraction(from, to, convention);
            let gap = f64::from(to.year() - from.year());
            prop_assert!(yf.is_finite());
            prop_assert!(yf > gap - 1.1 && yf < gap * 1.02 + 1.1, "{convention}: {yf} vs {gap}");
        }

        #[test]
        fn name_round_trips(convention in convention_strategy()) {
            let parsed: Convention = convention.to_string().parse().unwrap();
            prop_assert_eq!(parsed, convention);
        }
    }
}
