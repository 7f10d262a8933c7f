use serde::{Deserialize, Serialize};

use crate::model::stats::WorkerStats;
use crate::service::stats_service::SortKey;

/// One row of the sorted worker summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    pub name: String,
    pub total: u32,
    pub friday: u32,
    pub saturday: u32,
    pub sunday: u32,
    pub weekend: u32,
    pub last_position: u32,
    pub weekend_percentage: f64,
    #[serde(flatten)]
    pub months: MonthCounts,
}

impl WorkerSummary {
    pub fn from_stats(name: &str, stats: &WorkerStats) -> Self {
        Self {
            name: name.to_string(),
            total: stats.total,
            friday: stats.friday,
            saturday: stats.saturday,
            sunday: stats.sunday,
            weekend: stats.weekend,
            last_position: stats.last_position,
            weekend_percentage: stats.weekend_percentage(),
            months: MonthCounts::from(stats.months),
        }
    }

    /// Raw counter behind a numeric sort key. `Name` and
    /// `WeekendPercentage` are not counters and read as 0.
    pub fn counter(&self, key: SortKey) -> u32 {
        match key {
            SortKey::Total => self.total,
            SortKey::Weekend => self.weekend,
            SortKey::Friday => self.friday,
            SortKey::Saturday => self.saturday,
            SortKey::Sunday => self.sunday,
            SortKey::LastPosition => self.last_position,
            SortKey::WeekendPercentage | SortKey::Name => 0,
        }
    }

    pub fn month(&self, month: u32) -> u32 {
        self.months.get(month)
    }
}

/// Shifts per calendar month, one named key per month when serialized.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCounts {
    pub january: u32,
    pub february: u32,
    pub march: u32,
    pub april: u32,
    pub may: u32,
    pub june: u32,
    pub july: u32,
    pub august: u32,
    pub september: u32,
    pub october: u32,
    pub november: u32,
    pub december: u32,
}

impl MonthCounts {
    pub fn get(&self, month: u32) -> u32 {
        match month {
            1 => self.january,
            2 => self.february,
            3 => self.march,
            4 => self.april,
            5 => self.may,
            6 => self.june,
            7 => self.july,
            8 => self.august,
            9 => self.september,
            10 => self.october,
            11 => self.november,
            12 => self.december,
            _ => 0,
        }
    }
}

impl From<[u32; 12]> for MonthCounts {
    fn from(months: [u32; 12]) -> Self {
        let [january, february, march, april, may, june, july, august, september, october, november, december] =
            months;
        Self {
            january,
            february,
            march,
            april,
            may,
            june,
            july,
            august,
            september,
            october,
            november,
            december,
        }
    }
}

/// Monthly breakdown for one worker, columns in season order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRow {
    pub name: String,
    #[serde(rename = "Dic")]
    pub december: u32,
    #[serde(rename = "Ene")]
    pub january: u32,
    #[serde(rename = "Feb")]
    pub february: u32,
    #[serde(rename = "Mar")]
    pub march: u32,
    #[serde(rename = "Abr")]
    pub april: u32,
    #[serde(rename = "May")]
    pub may: u32,
    #[serde(rename = "Jun")]
    pub june: u32,
    #[serde(rename = "Jul")]
    pub july: u32,
    #[serde(rename = "Ago")]
    pub august: u32,
    #[serde(rename = "Sep")]
    pub september: u32,
    #[serde(rename = "Oct")]
    pub october: u32,
    #[serde(rename = "Nov")]
    pub november: u32,
}

impl MonthlyRow {
    pub fn from_summary(summary: &WorkerSummary) -> Self {
        Self {
            name: summary.name.clone(),
            december: summary.month(12),
            january: summary.month(1),
            february: summary.month(2),
            march: summary.month(3),
            april: summary.month(4),
            may: summary.month(5),
            june: summary.month(6),
            july: summary.month(7),
            august: summary.month(8),
            september: summary.month(9),
            october: summary.month(10),
            november: summary.month(11),
        }
    }
}

/// Body shipped to the external PDF rendering service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportPayload {
    pub workers: Vec<WorkerSummary>,
    pub monthly_data: Vec<MonthlyRow>,
    pub format: String,
    pub analysis_period: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonExport {
    pub workers: Vec<WorkerSummary>,
}
