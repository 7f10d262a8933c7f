use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::ParseError;

/// Calendar month names used as counter keys, indexed by `month - 1`.
pub const MONTH_KEYS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Short Spanish labels for report columns, indexed by `month - 1`.
pub const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun",
    "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

const MONTH_NAMES_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Report order for a season that starts in December.
pub const SEASON_MONTHS: [u32; 12] = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

pub fn parse_start_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ParseError::InvalidStartDate {
        input: input.to_string(),
    })
}

/// Resolves `day` against the month of `anchor`, letting out-of-range days
/// spill into neighbouring months (day 0 is the last day of the previous
/// month, day 32 of a 31-day month is the 1st of the next).
pub fn with_day_overflow(anchor: NaiveDate, day: u32) -> Option<NaiveDate> {
    let first = anchor.with_day(1)?;
    first.checked_add_signed(Duration::days(day as i64 - 1))
}

/// First day of the month after `date`'s month. December rolls into January.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// Date for a `(year, month, day)` triple where `day` may overflow the month.
pub fn resolve_record_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    with_day_overflow(first, day)
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Long Spanish period label, e.g. `diciembre de 2025`.
pub fn analysis_period(date: NaiveDate) -> String {
    format!("{} de {}", MONTH_NAMES_ES[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2025-12-22").unwrap(), date(2025, 12, 22));
        assert_eq!(parse_start_date(" 2025-12-22 ").unwrap(), date(2025, 12, 22));
        assert!(parse_start_date("22/12/2025").is_err());
        assert!(parse_start_date("").is_err());
    }

    #[test]
    fn test_with_day_overflow() {
        assert_eq!(with_day_overflow(date(2025, 12, 22), 31), Some(date(2025, 12, 31)));
        assert_eq!(with_day_overflow(date(2025, 12, 22), 32), Some(date(2026, 1, 1)));
        assert_eq!(with_day_overflow(date(2026, 2, 10), 30), Some(date(2026, 3, 2)));
        assert_eq!(with_day_overflow(date(2026, 3, 5), 0), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(date(2025, 12, 31)), Some(date(2026, 1, 1)));
        assert_eq!(first_of_next_month(date(2026, 1, 15)), Some(date(2026, 2, 1)));
    }

    #[test]
    fn test_weekend_days() {
        assert!(is_weekend(Weekday::Fri));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Mon));
        assert!(!is_weekend(Weekday::Thu));
    }

    #[test]
    fn test_analysis_period() {
        assert_eq!(analysis_period(date(2025, 12, 22)), "diciembre de 2025");
        assert_eq!(analysis_period(date(2026, 3, 1)), "marzo de 2026");
    }
}
