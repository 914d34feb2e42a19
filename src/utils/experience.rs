//! Years-of-experience derivation for the profile.

use super::date::DateTimeUtc;

/// Whole years between `start` and `today`.
///
/// The count only increments on the anniversary itself; a start date in the
/// future yields 0.
pub fn elapsed_years(start: DateTimeUtc, today: DateTimeUtc) -> u32 {
    let mut years = i32::from(today.year) - i32::from(start.year);
    if (today.month, today.day) < (start.month, start.day) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Years of experience from a career start date plus a fixed offset for
/// training time before the first job.
///
/// Returns `None` when `started` is not a valid date. Callers render that as
/// "less than 1" rather than failing.
pub fn years_of_experience(started: &str, today: DateTimeUtc, offset: u32) -> Option<u32> {
    let start = DateTimeUtc::parse(started)?;
    Some(elapsed_years(start, today) + offset)
}

/// Human phrase used in profile descriptions, e.g. `"3+ years"`.
pub fn experience_phrase(years: Option<u32>) -> String {
    match years {
        None | Some(0) => "less than 1+ year".to_owned(),
        Some(1) => "1+ year".to_owned(),
        Some(n) => format!("{n}+ years"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "2021-02-01";

    fn ymd(year: u16, month: u8, day: u8) -> DateTimeUtc {
        DateTimeUtc::from_ymd(year, month, day)
    }

    #[test]
    fn test_day_before_anniversary() {
        assert_eq!(years_of_experience(START, ymd(2024, 1, 31), 1), Some(3));
    }

    #[test]
    fn test_on_anniversary_counts_full_year() {
        assert_eq!(years_of_experience(START, ymd(2024, 2, 1), 1), Some(4));
    }

    #[test]
    fn test_same_month_earlier_day() {
        assert_eq!(elapsed_years(ymd(2021, 6, 20), ymd(2024, 6, 19)), 2);
        assert_eq!(elapsed_years(ymd(2021, 6, 20), ymd(2024, 6, 20)), 3);
    }

    #[test]
    fn test_increments_once_per_year() {
        let start = ymd(2019, 9, 15);
        let mut previous = 0;
        for year in 2019..=2030 {
            let on = elapsed_years(start, ymd(year, 9, 15));
            let before = elapsed_years(start, ymd(year, 9, 14));
            assert!(on >= previous);
            if year > 2019 {
                assert_eq!(on, before + 1, "anniversary in {year}");
            }
            previous = on;
        }
    }

    #[test]
    fn test_monotonic_over_a_year_of_days() {
        let start = ymd(2020, 2, 29);
        let mut previous = 0;
        for month in 1..=12u8 {
            for day in [1u8, 15, 28] {
                let years = elapsed_years(start, ymd(2025, month, day));
                assert!(years >= previous);
                previous = years;
            }
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_future_start_is_not_negative() {
        assert_eq!(elapsed_years(ymd(2030, 1, 1), ymd(2024, 6, 1)), 0);
        assert_eq!(years_of_experience("2030-01-01", ymd(2024, 6, 1), 1), Some(1));
    }

    #[test]
    fn test_invalid_start_is_none() {
        assert_eq!(years_of_experience("invalid", ymd(2024, 6, 1), 1), None);
        assert_eq!(years_of_experience("", ymd(2024, 6, 1), 1), None);
        assert_eq!(years_of_experience("2021-02-30", ymd(2024, 6, 1), 1), None);
    }

    #[test]
    fn test_experience_phrase() {
        assert_eq!(experience_phrase(None), "less than 1+ year");
        assert_eq!(experience_phrase(Some(0)), "less than 1+ year");
        assert_eq!(experience_phrase(Some(1)), "1+ year");
        assert_eq!(experience_phrase(Some(4)), "4+ years");
    }
}
