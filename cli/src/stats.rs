use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Gauge, Padding, Paragraph},
};
use shiftstats_core::service::stats_service::chart_window;
use shiftstats_core::{SortKey, WorkerSummary};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    total: Color,
    weekend: Color,
    last: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    total: Color::Blue,
    weekend: Color::Red,
    last: Color::Green,
};

const LABEL_WIDTH: usize = 8;
// Three bars per worker; together they span the label.
const BAR_WIDTH: u16 = 3;

/// Sliding window over the chart. The window start is the only view state.
pub struct ChartApp {
    pub summary: Vec<WorkerSummary>,
    pub sort_by: SortKey,
    pub start: usize,
    pub width: usize,
    pub step: usize,
}

impl ChartApp {
    pub fn new(summary: Vec<WorkerSummary>, sort_by: SortKey, width: usize, step: usize) -> Self {
        Self {
            summary,
            sort_by,
            start: 0,
            width: width.max(1),
            step: step.max(1),
        }
    }

    /// Slides forward, stopping where the window touches the last worker.
    pub fn scroll_forward(&mut self) {
        let last_start = self.summary.len().saturating_sub(self.width);
        self.start = (self.start + self.step).min(last_start);
    }

    pub fn scroll_back(&mut self) {
        self.start = self.start.saturating_sub(self.step);
    }

    pub fn has_next(&self) -> bool {
        self.start + self.width < self.summary.len()
    }

    pub fn window(&self) -> &[WorkerSummary] {
        chart_window(&self.summary, self.start, self.width)
    }
}

pub fn run(summary: Vec<WorkerSummary>, sort_by: SortKey, width: usize, step: usize) -> Result<()> {
    if summary.is_empty() {
        println!("No shifts to chart.");
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChartApp::new(summary, sort_by, width, step);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.scroll_back(),
                        KeyCode::Right | KeyCode::Char('l') => app.scroll_forward(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &ChartApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + sidebar
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(1),
            Constraint::Length(36),
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled("SHIFT STATS", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let last = (app.start + app.width).min(app.summary.len());
    let title = format!(" Workers {}-{} of {} ", app.start + 1, last, app.summary.len());
    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(if app.start > 0 { THEME.text } else { THEME.muted })),
        Span::styled(title, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(if app.has_next() { THEME.text } else { THEME.muted })),
    ]);
    let nav = Paragraph::new(nav_text).alignment(Alignment::Right).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);
    frame.render_widget(
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)),
        main_layout[0],
    );

    // --- Content ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75),
            Constraint::Length(1),
            Constraint::Percentage(25),
        ])
        .split(main_layout[1]);

    draw_chart(frame, app.window(), content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("SCROLL: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center).style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn short_label(name: &str) -> String {
    name.chars().take(LABEL_WIDTH).collect()
}

fn worker_group(worker: &WorkerSummary) -> BarGroup<'static> {
    let bars = [
        Bar::default()
            .value(worker.total as u64)
            .style(Style::default().fg(THEME.total))
            .text_value(worker.total.to_string()),
        Bar::default()
            .value(worker.weekend as u64)
            .style(Style::default().fg(THEME.weekend))
            .text_value(worker.weekend.to_string()),
        Bar::default()
            .value(worker.last_position as u64)
            .style(Style::default().fg(THEME.last))
            .text_value(worker.last_position.to_string()),
    ];
    BarGroup::default()
        .label(Line::from(short_label(&worker.name)))
        .bars(&bars)
}

fn draw_chart(frame: &mut Frame, window: &[WorkerSummary], area: Rect) {
    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Total / Weekend / Last position ");

    let chart = window.iter().fold(
        BarChart::default()
            .block(chart_block)
            .bar_width(BAR_WIDTH)
            .bar_gap(0)
            .group_gap(1),
        |chart, worker| chart.data(worker_group(worker)),
    );

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(1),
        ])
        .split(area);

    let shifts: u32 = app.summary.iter().map(|w| w.total).sum();
    let weekend: u32 = app.summary.iter().map(|w| w.weekend).sum();

    let info_text = vec![
        Line::from(vec![Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Workers:  ", Style::default().fg(THEME.muted)),
            Span::styled(app.summary.len().to_string(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Shifts:   ", Style::default().fg(THEME.muted)),
            Span::styled(shifts.to_string(), Style::default().fg(THEME.total).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Weekend:  ", Style::default().fg(THEME.muted)),
            Span::styled(weekend.to_string(), Style::default().fg(THEME.weekend).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Sorted:   ", Style::default().fg(THEME.muted)),
            Span::styled(app.sort_by.to_string(), Style::default().fg(THEME.text)),
        ]),
    ];

    let info_block = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Summary "));
    frame.render_widget(info_block, chunks[0]);

    let ratio = if shifts > 0 { weekend as f64 / shifts as f64 } else { 0.0 };
    let gauge = Gauge::default()
        .block(Block::default().title(" Weekend share ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(THEME.weekend))
        .ratio(ratio.min(1.0))
        .label(format!("{:.1}%", ratio * 100.0));

    frame.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftstats_core::WorkerStats;

    fn workers(n: usize) -> Vec<WorkerSummary> {
        (0..n)
            .map(|i| WorkerSummary::from_stats(&format!("W{}", i), &WorkerStats::default()))
            .collect()
    }

    #[test]
    fn test_window_slides_by_step() {
        let mut app = ChartApp::new(workers(22), SortKey::Total, 15, 5);
        assert_eq!(app.window().len(), 15);
        assert!(app.has_next());

        app.scroll_forward();
        assert_eq!(app.start, 5);
        // 22 - 15: the window stops flush with the last worker.
        app.scroll_forward();
        assert_eq!(app.start, 7);
        assert!(!app.has_next());
        assert_eq!(app.window()[0].name, "W7");
        assert_eq!(app.window().last().map(|w| w.name.as_str()), Some("W21"));

        app.scroll_back();
        assert_eq!(app.start, 2);
        app.scroll_back();
        assert_eq!(app.start, 0);
    }

    #[test]
    fn test_short_summary_never_scrolls() {
        let mut app = ChartApp::new(workers(4), SortKey::Total, 15, 5);
        app.scroll_forward();
        assert_eq!(app.start, 0);
        assert_eq!(app.window().len(), 4);
        assert!(!app.has_next());
    }

    #[test]
    fn test_short_label_fits_bar_group() {
        assert_eq!(short_label("MANUEL HERNANDEZ"), "MANUEL H");
        assert_eq!(short_label("ANA"), "ANA");
        assert!(LABEL_WIDTH <= 3 * BAR_WIDTH as usize);
    }
}
