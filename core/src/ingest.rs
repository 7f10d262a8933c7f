use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::service::calendar_parser::BLOCK_LINES;

/// Joins each row's non-empty cells with single spaces and drops rows that
/// end up empty. This is how spreadsheets become calendar text.
pub fn flatten_rows<I, R, S>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .filter_map(|row| {
            let cells: Vec<String> = row
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            (!cells.is_empty()).then(|| cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Loads calendar text from disk. Plain text is read as-is, CSV is
/// flattened. PDF and Excel need the external converters first.
pub fn load_calendar_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    debug!(path = %path.display(), ext = %ext, "loading calendar file");
    match ext.as_str() {
        "txt" | "" => fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display())),
        "csv" => read_csv(path),
        "pdf" => Err(anyhow!(
            "PDF files must be converted to text by the extraction service first: {}",
            path.display()
        )),
        "xlsx" | "xls" => Err(anyhow!(
            "Excel files must be exported to CSV or text first: {}",
            path.display()
        )),
        other => Err(anyhow!("Unsupported file format: .{}", other)),
    }
}

fn read_csv(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Could not open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    Ok(flatten_rows(rows))
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarFormat {
    WeekBased,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarStructure {
    pub days_count: usize,
    pub lines_per_week: usize,
    pub detected_format: CalendarFormat,
    pub lines: usize,
}

/// Quick look at the first block to tell whether the text resembles a
/// week-per-block calendar.
pub fn detect_structure(text: &str) -> CalendarStructure {
    // Empty text still counts as one (blank) line.
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let first = lines[0];

    // Standalone one or two digit numbers.
    let days_count = first
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty() && w.len() <= 2 && w.chars().all(|c| c.is_ascii_digit()))
        .count();

    CalendarStructure {
        days_count,
        lines_per_week: lines.len().min(BLOCK_LINES),
        detected_format: if days_count <= 7 {
            CalendarFormat::WeekBased
        } else {
            CalendarFormat::Unknown
        },
        lines: lines.len(),
    }
}
