use shiftstats_core::time::MONTH_LABELS;
use shiftstats_core::{CalendarStructure, DayRecord, WorkerSummary};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Worker")]
    name: String,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "Fri")]
    friday: u32,
    #[tabled(rename = "Sat")]
    saturday: u32,
    #[tabled(rename = "Sun")]
    sunday: u32,
    #[tabled(rename = "Weekend")]
    weekend: u32,
    #[tabled(rename = "% Weekend")]
    weekend_percentage: String,
    #[tabled(rename = "Last pos.")]
    last_position: u32,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Workers")]
    workers: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn show_general(summary: &[WorkerSummary]) {
    if summary.is_empty() {
        println!("No shifts found.");
        return;
    }

    let rows: Vec<SummaryRow> = summary
        .iter()
        .map(|w| SummaryRow {
            name: w.name.clone(),
            total: w.total,
            friday: w.friday,
            saturday: w.saturday,
            sunday: w.sunday,
            weekend: w.weekend,
            weekend_percentage: format!("{:.1}%", w.weekend_percentage),
            last_position: w.last_position,
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}

/// Per-month shift counts; months nobody worked are left out.
pub fn show_monthly(summary: &[WorkerSummary], active_months: &[u32]) {
    if summary.is_empty() || active_months.is_empty() {
        println!("No shifts found.");
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec!["Worker".to_string()];
    header.extend(active_months.iter().map(|&m| MONTH_LABELS[m as usize - 1].to_string()));
    header.push("Total".to_string());
    builder.push_record(header);

    for w in summary {
        let mut record = vec![w.name.clone()];
        record.extend(active_months.iter().map(|&m| w.month(m).to_string()));
        record.push(w.total.to_string());
        builder.push_record(record);
    }

    println!("{}", styled(builder.build()));
}

pub fn show_days(records: &[DayRecord]) {
    if records.is_empty() {
        println!("No days parsed.");
        return;
    }

    let rows: Vec<DayRow> = records
        .iter()
        .map(|r| {
            let date = r.date();
            DayRow {
                date: date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| format!("{:04}-{:02}-{:02}", r.year, r.month, r.day)),
                weekday: date.map(|d| d.format("%a").to_string()).unwrap_or_else(|| "-".to_string()),
                workers: r.workers.join(", "),
            }
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}

pub fn show_structure(structure: &CalendarStructure) {
    println!("Days in first header: {}", structure.days_count);
    println!("Lines per week:       {}", structure.lines_per_week);
    println!("Total lines:          {}", structure.lines);
    println!("Detected format:      {:?}", structure.detected_format);
}
