use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::resolve_record_date;

/// One parsed calendar day and the workers assigned to it, in row order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub workers: Vec<String>,
}

impl DayRecord {
    pub fn new(day: u32, month: u32, year: i32, workers: Vec<String>) -> Self {
        Self { day, month, year, workers }
    }

    /// Calendar date of the record. A day past the end of its month spills
    /// into the following month, matching how the running date advanced.
    pub fn date(&self) -> Option<NaiveDate> {
        resolve_record_date(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.date().map(|d| d.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday() {
        let monday = DayRecord::new(22, 12, 2025, vec![]);
        assert_eq!(monday.weekday(), Some(Weekday::Mon));

        let friday = DayRecord::new(26, 12, 2025, vec![]);
        assert_eq!(friday.weekday(), Some(Weekday::Fri));
    }

    #[test]
    fn test_overflowing_day_resolves_forward() {
        // 32 December 2025 is 1 January 2026, a Thursday.
        let record = DayRecord::new(32, 12, 2025, vec![]);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(record.weekday(), Some(Weekday::Thu));
    }
}
