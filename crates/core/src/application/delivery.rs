// Delivery Use Case

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DeliveryMethod, DomainError, Result, Screen, ScreenRegistry};
use crate::port::Clock;

/// Delivery form (Recorded -> Delivered)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryForm {
    pub method: DeliveryMethod,
    pub delivery_person: String,
}

pub fn validate_form(form: &DeliveryForm) -> Result<()> {
    if form.delivery_person.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "delivery person name is required".to_string(),
        ));
    }
    Ok(())
}

/// Execute delivery use case. The hand-over instant comes from the
/// injected clock, never from the form.
pub fn execute(
    registry: &mut ScreenRegistry,
    clock: &dyn Clock,
    id: &str,
    form: DeliveryForm,
) -> Result<Screen> {
    validate_form(&form)?;

    let now = clock.now();
    let screen = registry.update_with(id, |s| {
        s.deliver(form.method, form.delivery_person.clone(), now)
    })?;

    info!(
        screen_id = %screen.id,
        method = %form.method,
        delivery_person = %form.delivery_person,
        "Screen delivered"
    );

    Ok(screen)
}
