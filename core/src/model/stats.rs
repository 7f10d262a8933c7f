use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::time::is_weekend;

/// Row of the block that counts as the rotation's last position.
pub const LAST_POSITION_INDEX: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub total: u32,
    pub friday: u32,
    pub saturday: u32,
    pub sunday: u32,
    pub weekend: u32,
    pub last_position: u32,
    /// Shifts per calendar month, indexed by `month - 1`.
    pub months: [u32; 12],
}

impl WorkerStats {
    pub fn record(&mut self, position: usize, weekday: Option<Weekday>, month: u32) {
        self.total += 1;
        match weekday {
            Some(Weekday::Fri) => self.friday += 1,
            Some(Weekday::Sat) => self.saturday += 1,
            Some(Weekday::Sun) => self.sunday += 1,
            _ => {}
        }
        if weekday.is_some_and(is_weekend) {
            self.weekend += 1;
        }
        if position == LAST_POSITION_INDEX {
            self.last_position += 1;
        }
        if (1..=12).contains(&month) {
            self.months[month as usize - 1] += 1;
        }
    }

    pub fn month(&self, month: u32) -> u32 {
        match month {
            1..=12 => self.months[month as usize - 1],
            _ => 0,
        }
    }

    /// Weekend share of all shifts, rounded to one decimal.
    pub fn weekend_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.weekend as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

/// Per-worker counters in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerStatsTable {
    rows: Vec<(String, WorkerStats)>,
    index: HashMap<String, usize>,
}

impl WorkerStatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&mut self, name: &str) -> &mut WorkerStats {
        let pos = match self.index.get(name) {
            Some(&pos) => pos,
            None => {
                self.rows.push((name.to_string(), WorkerStats::default()));
                self.index.insert(name.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[pos].1
    }

    pub fn get(&self, name: &str) -> Option<&WorkerStats> {
        self.index.get(name).map(|&pos| &self.rows[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkerStats)> {
        self.rows.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
