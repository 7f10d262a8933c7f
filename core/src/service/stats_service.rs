use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::model::day::DayRecord;
use crate::model::stats::WorkerStatsTable;
use crate::service::dto::{MonthlyRow, WorkerSummary};
use crate::time::SEASON_MONTHS;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Total,
    Weekend,
    WeekendPercentage,
    Friday,
    Saturday,
    Sunday,
    LastPosition,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Total,
        SortKey::Weekend,
        SortKey::WeekendPercentage,
        SortKey::Friday,
        SortKey::Saturday,
        SortKey::Sunday,
        SortKey::LastPosition,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Total => "total",
            SortKey::Weekend => "weekend",
            SortKey::WeekendPercentage => "weekendPercentage",
            SortKey::Friday => "friday",
            SortKey::Saturday => "saturday",
            SortKey::Sunday => "sunday",
            SortKey::LastPosition => "lastPosition",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    /// Accepts `weekendPercentage`, `weekend-percentage` and
    /// `weekend_percentage` alike.
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == folded)
            .ok_or_else(|| anyhow!("Unknown sort key: '{}'", s))
    }
}

/// Folds day records into per-worker counters.
pub fn aggregate(records: &[DayRecord]) -> WorkerStatsTable {
    let mut table = WorkerStatsTable::new();

    for record in records {
        let weekday = record.weekday();
        for (position, worker) in record.workers.iter().enumerate() {
            table.entry(worker).record(position, weekday, record.month);
        }
    }

    table
}

pub fn summarize(table: &WorkerStatsTable, key: SortKey) -> Vec<WorkerSummary> {
    let mut rows: Vec<WorkerSummary> = table
        .iter()
        .map(|(name, stats)| WorkerSummary::from_stats(name, stats))
        .collect();
    sort_summary(&mut rows, key);
    rows
}

/// Stable sort: names ascending, everything else descending. Ties keep
/// first-appearance order.
pub fn sort_summary(rows: &mut [WorkerSummary], key: SortKey) {
    match key {
        SortKey::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::WeekendPercentage => rows.sort_by(|a, b| {
            b.weekend_percentage
                .partial_cmp(&a.weekend_percentage)
                .unwrap_or(Ordering::Equal)
        }),
        _ => rows.sort_by_key(|row| Reverse(row.counter(key))),
    }
}

pub fn monthly_rows(summary: &[WorkerSummary]) -> Vec<MonthlyRow> {
    summary.iter().map(MonthlyRow::from_summary).collect()
}

/// Season months (December first) with at least one shift overall.
pub fn active_months(summary: &[WorkerSummary]) -> Vec<u32> {
    SEASON_MONTHS
        .into_iter()
        .filter(|&month| summary.iter().map(|w| w.month(month)).sum::<u32>() > 0)
        .collect()
}

/// Page of at most `width` workers starting at `start`, clamped so the
/// window never runs past the end.
pub fn chart_window(summary: &[WorkerSummary], start: usize, width: usize) -> &[WorkerSummary] {
    let start = start.min(summary.len().saturating_sub(width));
    let end = (start + width).min(summary.len());
    &summary[start..end]
}
