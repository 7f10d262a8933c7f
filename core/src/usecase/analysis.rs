use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::AnalysisError;
use crate::input::NameMapping;
use crate::model::day::DayRecord;
use crate::model::stats::WorkerStatsTable;
use crate::repository::MappingRepository;
use crate::service::calendar_parser::CalendarParser;
use crate::service::dto::{MonthlyRow, WorkerSummary};
use crate::service::stats_service::{active_months, aggregate, monthly_rows, summarize, SortKey};
use crate::time::parse_start_date;

/// Inputs of one analysis run. View state such as the sort key travels
/// with the request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub calendar_text: String,
    pub start_date: String,
    pub sort_by: SortKey,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub start_date: NaiveDate,
    pub records: Vec<DayRecord>,
    pub summary: Vec<WorkerSummary>,
    pub monthly: Vec<MonthlyRow>,
    /// Season months with at least one shift, December first.
    pub active_months: Vec<u32>,
    #[serde(skip)]
    pub stats: WorkerStatsTable,
}

impl AnalysisReport {
    /// Re-sorts the summary without parsing again.
    pub fn sorted_by(&self, key: SortKey) -> Vec<WorkerSummary> {
        summarize(&self.stats, key)
    }
}

/// Parses, aggregates and sorts in one go.
pub fn run_analysis(request: &AnalysisRequest, mapping: &NameMapping) -> Result<AnalysisReport, AnalysisError> {
    if request.calendar_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let start_date = parse_start_date(&request.start_date)?;
    let records = CalendarParser::new(mapping).parse(&request.calendar_text, &request.start_date)?;
    let stats = aggregate(&records);
    let summary = summarize(&stats, request.sort_by);
    let monthly = monthly_rows(&summary);
    let active_months = active_months(&summary);

    info!(
        days = records.len(),
        workers = summary.len(),
        sort_by = %request.sort_by,
        "analysis complete"
    );

    Ok(AnalysisReport {
        start_date,
        records,
        summary,
        monthly,
        active_months,
        stats,
    })
}

pub struct AnalysisUseCase<'a, M: MappingRepository> {
    mapping_repo: &'a M,
}

impl<'a, M: MappingRepository> AnalysisUseCase<'a, M> {
    pub fn new(mapping_repo: &'a M) -> Self {
        Self { mapping_repo }
    }

    /// Runs with the persisted mapping, extended by `extra` entries which
    /// take precedence on duplicate keys.
    pub fn analyze(&self, request: &AnalysisRequest, extra: Option<&NameMapping>) -> anyhow::Result<AnalysisReport> {
        let mut mapping = self.mapping_repo.load()?;
        if let Some(extra) = extra {
            for (from, to) in extra.entries() {
                mapping.insert(from, to);
            }
        }
        Ok(run_analysis(request, &mapping)?)
    }
}
