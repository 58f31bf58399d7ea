// Query Layer - Pull-based views over the registry
//
// Every function takes a slice and hands back a fresh Vec; nothing here
// mutates the registry or caches results. Composed views always run in
// the same order: stage filter, month filter, chronological sort, text
// search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Result, Screen, ScreenStatus};

/// Calendar month key, "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

impl MonthKey {
    /// Month of an instant, e.g. 2024-05-10T14:00:00Z -> "2024-05".
    pub fn of(instant: &DateTime<Utc>) -> Self {
        MonthKey(instant.format("%Y-%m").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let b = s.as_bytes();
        let well_formed = b.len() == 7
            && b[..4].iter().all(u8::is_ascii_digit)
            && b[4] == b'-'
            && matches!((b[5], b[6]), (b'0', b'1'..=b'9') | (b'1', b'0'..=b'2'));
        if !well_formed {
            return Err(DomainError::ValidationError(format!(
                "invalid month key: {} (expected YYYY-MM)",
                s
            )));
        }
        Ok(MonthKey(s.to_string()))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> String {
        key.0
    }
}

/// Keep only screens at the given stage.
pub fn with_status(screens: &[Screen], status: ScreenStatus) -> Vec<Screen> {
    screens
        .iter()
        .filter(|s| s.status == status)
        .cloned()
        .collect()
}

/// Case-insensitive substring match over client name and tracking number.
/// A blank term matches everything.
pub fn search(screens: &[Screen], term: &str) -> Vec<Screen> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return screens.to_vec();
    }
    screens
        .iter()
        .filter(|s| {
            s.client_name.to_lowercase().contains(&term)
                || s.tracking_number.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Keep only screens created in the given month. The comparison is a
/// string prefix over the RFC 3339 rendering of `created_at`, so it stays
/// in UTC and never touches calendar arithmetic.
pub fn in_month(screens: &[Screen], month: &MonthKey) -> Vec<Screen> {
    screens
        .iter()
        .filter(|s| s.created_at.to_rfc3339().starts_with(month.as_str()))
        .cloned()
        .collect()
}

/// Newest first. The sort is stable, so screens created at the same
/// instant keep their registration order.
pub fn newest_first(screens: &[Screen]) -> Vec<Screen> {
    let mut sorted = screens.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// One composed view over the registry.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub status: Option<ScreenStatus>,
    pub month: Option<MonthKey>,
    pub search: String,
}

impl ViewQuery {
    pub fn apply(&self, screens: &[Screen]) -> Vec<Screen> {
        let mut view = match self.status {
            Some(status) => with_status(screens, status),
            None => screens.to_vec(),
        };
        if let Some(month) = &self.month {
            view = in_month(&view, month);
        }
        view = newest_first(&view);
        search(&view, &self.search)
    }
}

/// Everything registered in one calendar month, any stage, plus the total
/// shown in the report header.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: MonthKey,
    pub total: usize,
    pub screens: Vec<Screen>,
}

pub fn monthly_report(screens: &[Screen], month: MonthKey) -> MonthlyReport {
    let view = ViewQuery {
        status: None,
        month: Some(month.clone()),
        search: String::new(),
    }
    .apply(screens);
    MonthlyReport {
        month,
        total: view.len(),
        screens: view,
    }
}
