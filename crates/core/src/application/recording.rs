// Recording Use Case

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DomainError, Result, Screen, ScreenRegistry};

/// Recording form (Production -> Recorded)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingForm {
    pub date: NaiveDate,
    pub recorded_by: String,
}

pub fn validate_form(form: &RecordingForm) -> Result<()> {
    if form.recorded_by.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "recorder name is required".to_string(),
        ));
    }
    Ok(())
}

/// Execute recording use case. The transition guard lives on the screen
/// itself; an out-of-order call comes back as InvalidStatusTransition and
/// the stored screen is untouched.
pub fn execute(registry: &mut ScreenRegistry, id: &str, form: RecordingForm) -> Result<Screen> {
    validate_form(&form)?;

    let screen = registry.update_with(id, |s| s.record(form.date, form.recorded_by.clone()))?;

    info!(
        screen_id = %screen.id,
        recorded_by = %form.recorded_by,
        date = %form.date,
        "Screen recorded"
    );

    Ok(screen)
}
