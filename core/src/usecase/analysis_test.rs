use crate::error::{AnalysisError, ParseError};
use crate::input::NameMapping;
use crate::repository::MappingRepository;
use crate::service::stats_service::SortKey;
use crate::usecase::analysis::{run_analysis, AnalysisRequest, AnalysisUseCase};
use anyhow::Result;
use std::cell::RefCell;

struct MockMappingRepo {
    mapping: RefCell<NameMapping>,
}

impl MockMappingRepo {
    fn new(text: &str) -> Self {
        Self { mapping: RefCell::new(NameMapping::parse(text)) }
    }
}

impl MappingRepository for MockMappingRepo {
    fn load(&self) -> Result<NameMapping> {
        Ok(self.mapping.borrow().clone())
    }

    fn save(&self, mapping: &NameMapping) -> Result<()> {
        *self.mapping.borrow_mut() = mapping.clone();
        Ok(())
    }
}

fn request(text: &str, start: &str) -> AnalysisRequest {
    AnalysisRequest {
        calendar_text: text.to_string(),
        start_date: start.to_string(),
        sort_by: SortKey::Total,
    }
}

#[test]
fn test_two_day_calendar_end_to_end() {
    let text = "22 23\nANA PEP\nCAR DAN\nEVA FER\nGIL HUG";
    let report = run_analysis(&request(text, "2025-12-22"), &NameMapping::default()).unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].workers, vec!["ANA", "CAR", "EVA", "GIL"]);
    assert_eq!(report.records[1].workers, vec!["PEP", "DAN", "FER", "HUG"]);

    assert_eq!(report.summary.len(), 8);
    for worker in &report.summary {
        assert_eq!(worker.total, 1, "{}", worker.name);
        assert_eq!(worker.weekend, 0);
        assert_eq!(worker.friday + worker.saturday + worker.sunday, 0);
        assert_eq!(worker.month(12), 1);
    }

    // Fourth row of the block.
    assert_eq!(report.stats.get("GIL").map(|s| s.last_position), Some(1));
    assert_eq!(report.stats.get("HUG").map(|s| s.last_position), Some(1));
    assert_eq!(report.stats.get("ANA").map(|s| s.last_position), Some(0));
    assert_eq!(report.active_months, vec![12]);
}

#[test]
fn test_two_week_season_across_new_year() {
    let text = "\
29 30 31 1 2 3 4
LUIS H ANA PEP reque ROSA LUIS H ANA
ANA PEP ROSA LUIS H reque ANA PEP
PEP ROSA reque ANA LUIS H PEP ROSA
ROSA reque LUIS H PEP ANA ROSA reque";
    let mapping = NameMapping::parse("reque=LUIS R\nluis h=LUIS H");
    let report = run_analysis(&request(text, "2025-12-29"), &mapping).unwrap();

    assert_eq!(report.records.len(), 7);
    let months: Vec<(u32, i32)> = report.records.iter().map(|r| (r.month, r.year)).collect();
    assert_eq!(months[..3], [(12, 2025); 3]);
    assert_eq!(months[3..], [(1, 2026); 4]);

    // 2026-01-02 is a Friday, 3 Saturday, 4 Sunday.
    assert_eq!(report.records[4].workers, vec!["ROSA", "LUIS R", "LUIS H", "ANA"]);
    let luis_r = report.stats.get("LUIS R").unwrap();
    assert_eq!(luis_r.total, 5);
    assert_eq!(luis_r.friday, 1);
    assert_eq!(luis_r.saturday, 0);
    assert_eq!(luis_r.sunday, 1);
    assert_eq!(luis_r.weekend, 2);
    assert_eq!(luis_r.last_position, 2);
    assert_eq!(luis_r.month(12), 2);
    assert_eq!(luis_r.month(1), 3);

    let total: u32 = report.summary.iter().map(|w| w.total).sum();
    assert_eq!(total, 28);
    let order: Vec<&str> = report.summary.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(order, vec!["ANA", "PEP", "ROSA", "LUIS H", "LUIS R"]);
    assert_eq!(report.active_months, vec![12, 1]);
}

#[test]
fn test_single_letter_rows_collapse_into_first_day() {
    let report = run_analysis(&request("22 23\nA B\nC D\nE F\nG H", "2025-12-22"), &NameMapping::default()).unwrap();

    assert_eq!(report.records[0].workers, vec!["A B", "C D", "E F", "G H"]);
    assert!(report.records[1].workers.is_empty());
    let total: u32 = report.summary.iter().map(|w| w.total).sum();
    assert_eq!(total, 4);
}

#[test]
fn test_sort_by_name_in_report() {
    let report = run_analysis(&request("1\nB\nA", "2026-01-01"), &NameMapping::default()).unwrap();
    let names: Vec<_> = report.sorted_by(SortKey::Name).into_iter().map(|w| w.name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_empty_input_is_rejected_before_parsing() {
    let err = run_analysis(&request("  \n ", "bogus"), &NameMapping::default()).unwrap_err();
    assert_eq!(err, AnalysisError::EmptyInput);
}

#[test]
fn test_parse_error_yields_single_message() {
    let err = run_analysis(&request("22 xx\nA B", "2025-12-22"), &NameMapping::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(ParseError::InvalidDayToken { .. })));
    assert_eq!(
        err.to_string(),
        "failed to parse calendar: block 0: day token 'xx' is not a number"
    );
}

#[test]
fn test_usecase_merges_persisted_and_extra_mapping() {
    let repo = MockMappingRepo::new("reque=LUIS R\nrobert=ROBERTO");
    repo.add("agueda", "AGUEDA").unwrap();
    let usecase = AnalysisUseCase::new(&repo);

    let extra = NameMapping::parse("robert=ROBERT K");
    let report = usecase
        .analyze(&request("1 2\nReque robert\nagueda pep", "2026-01-01"), Some(&extra))
        .unwrap();

    assert_eq!(report.records[0].workers, vec!["LUIS R", "AGUEDA"]);
    assert_eq!(report.records[1].workers, vec!["ROBERT K", "pep"]);
}
