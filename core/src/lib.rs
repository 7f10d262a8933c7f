pub mod error;
pub mod ingest;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::{AnalysisError, ParseError};
pub use ingest::{detect_structure, flatten_rows, load_calendar_text, CalendarFormat, CalendarStructure};
pub use input::{is_likely_initial, NameMapping};
pub use model::day::DayRecord;
pub use model::stats::{WorkerStats, WorkerStatsTable};
pub use repository::{Config, FileConfigRepository, FileMappingRepository, MappingRepository};
pub use service::calendar_parser::{parse_calendar, parse_worker_names, CalendarParser};
pub use service::dto::{MonthCounts, MonthlyRow, PdfExportPayload, WorkerSummary};
pub use service::stats_service::{aggregate, sort_summary, summarize, SortKey};
pub use usecase::analysis::{run_analysis, AnalysisReport, AnalysisRequest, AnalysisUseCase};
