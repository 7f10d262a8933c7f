mod report;
mod stats;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use shiftstats_core::repository::{Config, FileConfigRepository, FileMappingRepository, MappingRepository};
use shiftstats_core::usecase::export::{pdf_payload, to_csv, to_json};
use shiftstats_core::{
    detect_structure, load_calendar_text, AnalysisReport, AnalysisRequest, AnalysisUseCase, NameMapping, SortKey,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shiftstats")]
#[command(about = "Parse shift-schedule calendars and report per-worker duty statistics", long_about = None)]
struct Cli {
    /// Directory holding config.json and mapping.txt (default: ~/.shiftstats)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct InputArgs {
    /// Calendar file (.txt or .csv), or `-` for stdin
    file: PathBuf,

    /// Date of the first day in the calendar (YYYY-MM-DD)
    #[arg(short, long)]
    start: Option<String>,

    /// Extra FROM=TO mapping file, applied over the saved mapping
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// total, weekend, weekendPercentage, friday, saturday, sunday, lastPosition or name
    #[arg(long, value_parser = parse_sort_key)]
    sort: Option<SortKey>,
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    General,
    Monthly,
    Days,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportTarget {
    Csv,
    Json,
    PdfPayload,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Analyze a calendar and print the worker summary
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value = "general")]
        view: View,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Export the summary as CSV, JSON or a PDF render payload
    Export {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum)]
        to: ExportTarget,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the detected block structure of a calendar file
    Structure {
        /// Calendar file (.txt or .csv), or `-` for stdin
        file: PathBuf,
    },
    /// Manage the saved name mapping
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },
    /// Open an interactive bar chart of the summary
    Chart {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Subcommand)]
enum MappingAction {
    /// List saved FROM=TO pairs in match order
    List,
    /// Add or replace one pair (usage: add "luis h=LUIS H")
    Add { pair: String },
    /// Append every pair from a FROM=TO file
    Import { file: PathBuf },
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_calendar(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    load_calendar_text(path)
}

fn run_input(input: &InputArgs, config: &Config, repo: &FileMappingRepository) -> Result<AnalysisReport> {
    let calendar_text = read_calendar(&input.file)?;
    let start_date = input
        .start
        .clone()
        .or_else(|| config.start_date.clone())
        .ok_or_else(|| anyhow!("A start date is required: pass --start YYYY-MM-DD or set start_date in config.json"))?;

    let extra = match &input.mapping {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
            Some(NameMapping::parse(&text))
        }
        None => None,
    };

    let request = AnalysisRequest {
        calendar_text,
        start_date,
        sort_by: input.sort.unwrap_or(config.sort_by),
    };
    debug!(start = %request.start_date, sort = %request.sort_by, "running analysis");

    AnalysisUseCase::new(repo).analyze(&request, extra.as_ref())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("Results saved to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = FileConfigRepository::new(cli.data_dir.clone())?.load()?;
    let repo = FileMappingRepository::new(cli.data_dir.clone())?;

    match cli.command {
        Commands::Analyze { input, view, format } => {
            let report = run_input(&input, &config, &repo)?;
            match format {
                OutputFormat::Table => match view {
                    View::General => report::show_general(&report.summary),
                    View::Monthly => report::show_monthly(&report.summary, &report.active_months),
                    View::Days => report::show_days(&report.records),
                },
                OutputFormat::Csv => print!("{}", to_csv(&report.summary)?),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Export { input, to, output } => {
            let report = run_input(&input, &config, &repo)?;
            let content = match to {
                ExportTarget::Csv => to_csv(&report.summary)?,
                ExportTarget::Json => to_json(&report.summary)?,
                ExportTarget::PdfPayload => {
                    let payload = pdf_payload(&report.summary, Some(report.start_date));
                    serde_json::to_string_pretty(&payload)?
                }
            };
            write_output(&content, output.as_deref())?;
        }
        Commands::Structure { file } => {
            let text = read_calendar(&file)?;
            report::show_structure(&detect_structure(&text));
        }
        Commands::Mapping { action } => match action {
            MappingAction::List => {
                let mapping = repo.load()?;
                if mapping.is_empty() {
                    println!("No name mappings saved ({}).", repo.file_path().display());
                } else {
                    for (from, to) in mapping.entries() {
                        println!("{:<20} => {}", from, to);
                    }
                }
            }
            MappingAction::Add { pair } => {
                let parsed = NameMapping::parse(&pair);
                let Some((from, to)) = parsed.entries().first() else {
                    println!("Error: expected FROM=TO, got '{}'.", pair);
                    return Ok(());
                };
                let mapping = repo.add(from, to)?;
                println!("Mapping saved: {} => {} ({} entries)", from, to, mapping.len());
            }
            MappingAction::Import { file } => {
                let text = fs::read_to_string(&file).with_context(|| format!("Could not read {}", file.display()))?;
                let mut mapping = repo.load()?;
                let imported = NameMapping::parse(&text);
                for (from, to) in imported.entries() {
                    mapping.insert(from, to);
                }
                repo.save(&mapping)?;
                println!("Imported {} mappings ({} total).", imported.len(), mapping.len());
            }
        },
        Commands::Chart { input } => {
            let report = run_input(&input, &config, &repo)?;
            stats::run(
                report.summary,
                input.sort.unwrap_or(config.sort_by),
                config.chart_window,
                config.chart_step,
            )?;
        }
    }
    Ok(())
}
