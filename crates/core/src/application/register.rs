// Registration Use Case

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Deadline, DomainError, Result, Screen, ScreenRegistry, Settings};
use crate::port::{Clock, IdProvider};

/// Length every tracking number must have, e.g. "NR0001".
pub const TRACKING_NUMBER_LEN: usize = 6;

/// Registration form (everything needed to open a screen in Production)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub tracking_number: String,
    pub client_name: String,
    pub quantity: u32,
    pub art_finisher: String,
    pub deadline: Deadline,
}

/// Validate a registration form against the session settings.
pub fn validate_form(form: &RegistrationForm, settings: &Settings) -> Result<()> {
    if form.tracking_number.chars().count() != TRACKING_NUMBER_LEN {
        return Err(DomainError::ValidationError(format!(
            "tracking number must be exactly {} characters",
            TRACKING_NUMBER_LEN
        )));
    }
    if form.client_name.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "client name is required".to_string(),
        ));
    }
    if form.quantity == 0 {
        return Err(DomainError::ValidationError(
            "quantity must be at least 1".to_string(),
        ));
    }
    if !settings.has_art_finisher(&form.art_finisher) {
        return Err(DomainError::ValidationError(format!(
            "art finisher {} is not on the roster",
            form.art_finisher
        )));
    }
    Ok(())
}

/// Execute registration use case
///
/// # Arguments
///
/// * `registry` - Screen registry for the session
/// * `settings` - Rosters the form is validated against
/// * `ids` - ID generator (injected for determinism)
/// * `clock` - Clock (injected for determinism)
/// * `form` - Registration form
pub fn execute(
    registry: &mut ScreenRegistry,
    settings: &Settings,
    ids: &dyn IdProvider,
    clock: &dyn Clock,
    form: RegistrationForm,
) -> Result<Screen> {
    validate_form(&form, settings)?;

    let screen = Screen::new(
        ids.generate_id(),
        clock.now(),
        form.tracking_number,
        form.client_name,
        form.quantity,
        form.art_finisher,
        form.deadline,
    );

    info!(
        screen_id = %screen.id,
        tracking_number = %screen.tracking_number,
        client = %screen.client_name,
        "Screen registered"
    );

    registry.append(screen.clone());
    Ok(screen)
}
