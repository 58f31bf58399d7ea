// Table rendering and terminal notices
//
// Tables stay uncolored so the column widths line up; colors only go on
// standalone lines (badges, successes, errors).

use colored::Colorize;
use tabled::{Table, Tabled};

use tela_core::application::MonthlyReport;
use tela_core::domain::{Screen, ScreenStatus};

/// Terminal rendition of the status badge colors.
pub fn status_badge(status: ScreenStatus) -> String {
    let label = status.to_string();
    match status {
        ScreenStatus::Production => label.yellow().to_string(),
        ScreenStatus::Recorded => label.blue().to_string(),
        ScreenStatus::Delivered => label.green().to_string(),
    }
}

#[derive(Tabled)]
struct ScreenRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "NR")]
    tracking: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Finisher")]
    finisher: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl ScreenRow {
    fn new(index: usize, screen: &Screen) -> Self {
        Self {
            index,
            tracking: screen.tracking_number.clone(),
            client: screen.client_name.clone(),
            quantity: screen.quantity,
            finisher: screen.art_finisher.clone(),
            deadline: screen.deadline.to_string(),
            status: screen.status.to_string(),
            created: screen.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Numbered screen list; the row numbers are what selections go by.
pub fn screen_table(screens: &[Screen]) -> String {
    let rows: Vec<ScreenRow> = screens
        .iter()
        .enumerate()
        .map(|(i, screen)| ScreenRow::new(i + 1, screen))
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "NR")]
    tracking: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Finisher")]
    finisher: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl ReportRow {
    fn new(screen: &Screen) -> Self {
        Self {
            tracking: screen.tracking_number.clone(),
            client: screen.client_name.clone(),
            finisher: screen.art_finisher.clone(),
            status: screen.status.to_string(),
            created: screen.created_at.format("%Y-%m-%d").to_string(),
            deadline: screen.deadline.to_string(),
            details: details(screen),
        }
    }
}

fn details(screen: &Screen) -> String {
    let mut parts = Vec::new();
    if let Some(recording) = &screen.recording {
        parts.push(format!(
            "recorded {} by {}",
            recording.date, recording.recorded_by
        ));
    }
    if let Some(delivery) = &screen.delivery {
        parts.push(format!(
            "out via {} with {}",
            delivery.method, delivery.delivery_person
        ));
    }
    parts.join("; ")
}

pub fn report_table(report: &MonthlyReport) -> String {
    let rows: Vec<ReportRow> = report.screens.iter().map(ReportRow::new).collect();
    Table::new(rows).to_string()
}

pub fn success(message: &str) {
    println!("{}", format!("✓ {}", message).green().bold());
}

pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

pub fn error(err: &impl std::fmt::Display) {
    eprintln!("{}", format!("✗ {}", err).red().bold());
}
