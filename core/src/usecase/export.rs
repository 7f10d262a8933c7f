use anyhow::Result;
use chrono::NaiveDate;

use crate::service::dto::{JsonExport, MonthlyRow, PdfExportPayload, WorkerSummary};
use crate::time::analysis_period;

pub const CSV_HEADER: [&str; 7] = [
    "Trabajador",
    "Total",
    "Viernes",
    "Sábado",
    "Domingo",
    "% Fin de Semana",
    "Rosell",
];

const DEFAULT_PERIOD: &str = "Análisis de Turnos";

/// Header unquoted, worker names always quoted, numbers bare.
pub fn to_csv(summary: &[WorkerSummary]) -> Result<String> {
    let mut header = csv::Writer::from_writer(Vec::new());
    header.write_record(CSV_HEADER)?;
    let buf = header.into_inner().map_err(|e| e.into_error())?;

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(buf);
    for w in summary {
        writer.write_record([
            w.name.clone(),
            w.total.to_string(),
            w.friday.to_string(),
            w.saturday.to_string(),
            w.sunday.to_string(),
            format!("{:.1}", w.weekend_percentage),
            w.last_position.to_string(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json(summary: &[WorkerSummary]) -> Result<String> {
    let export = JsonExport { workers: summary.to_vec() };
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn pdf_payload(summary: &[WorkerSummary], start_date: Option<NaiveDate>) -> PdfExportPayload {
    PdfExportPayload {
        workers: summary.to_vec(),
        monthly_data: summary.iter().map(MonthlyRow::from_summary).collect(),
        format: "pdf".to_string(),
        analysis_period: start_date
            .map(analysis_period)
            .unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stats::WorkerStats;

    fn worker(name: &str) -> WorkerSummary {
        let mut stats = WorkerStats::default();
        stats.record(3, Some(chrono::Weekday::Sat), 12);
        stats.record(0, Some(chrono::Weekday::Mon), 1);
        WorkerSummary::from_stats(name, &stats)
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&[worker("LUIS H"), worker("ANA, M")]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Trabajador,Total,Viernes,Sábado,Domingo,% Fin de Semana,Rosell");
        assert_eq!(lines[1], "\"LUIS H\",2,0,1,0,50.0,1");
        assert_eq!(lines[2], "\"ANA, M\",2,0,1,0,50.0,1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_export_uses_camel_case() {
        let json = to_json(&[worker("ANA")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["workers"][0]["lastPosition"], 1);
        assert_eq!(value["workers"][0]["weekendPercentage"], 50.0);
    }

    #[test]
    fn test_pdf_payload() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 22);
        let payload = pdf_payload(&[worker("ANA")], start);
        assert_eq!(payload.format, "pdf");
        assert_eq!(payload.analysis_period, "diciembre de 2025");
        assert_eq!(payload.monthly_data[0].december, 1);
        assert_eq!(payload.monthly_data[0].january, 1);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["monthlyData"][0]["Dic"], 1);
        assert_eq!(value["workers"][0]["december"], 1);
        assert_eq!(value["workers"][0]["january"], 1);
        assert_eq!(value["analysisPeriod"], "diciembre de 2025");

        assert_eq!(pdf_payload(&[], None).analysis_period, "Análisis de Turnos");
    }
}
