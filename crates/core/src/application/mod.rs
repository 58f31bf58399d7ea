// Application Layer - Use Cases and Session Service

pub mod delivery;
pub mod query;
pub mod recording;
pub mod register;


// Re-exports
pub use delivery::DeliveryForm;
pub use query::{MonthKey, MonthlyReport, ViewQuery};
pub use recording::RecordingForm;
pub use register::RegistrationForm;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Result, Screen, ScreenRegistry, ScreenStatus, Settings};
use crate::port::{Clock, IdProvider};

/// Session service: owns the registry and the rosters, drives every use
/// case through injected ports.
pub struct TrackerService {
    registry: ScreenRegistry,
    settings: Settings,
    ids: Arc<dyn IdProvider>,
    clock: Arc<dyn Clock>,
}

impl TrackerService {
    pub fn new(settings: Settings, ids: Arc<dyn IdProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: ScreenRegistry::new(),
            settings,
            ids,
            clock,
        }
    }

    /// Register a new screen in Production.
    pub fn register(&mut self, form: RegistrationForm) -> Result<Screen> {
        register::execute(
            &mut self.registry,
            &self.settings,
            self.ids.as_ref(),
            self.clock.as_ref(),
            form,
        )
    }

    /// Record a screen (Production -> Recorded).
    pub fn record(&mut self, id: &str, form: RecordingForm) -> Result<Screen> {
        recording::execute(&mut self.registry, id, form)
    }

    /// Deliver a screen (Recorded -> Delivered).
    pub fn deliver(&mut self, id: &str, form: DeliveryForm) -> Result<Screen> {
        delivery::execute(&mut self.registry, self.clock.as_ref(), id, form)
    }

    /// Every screen in registration order.
    pub fn screens(&self) -> &[Screen] {
        self.registry.screens()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Production screens, newest first, narrowed by a search term.
    pub fn awaiting_recording(&self, term: &str) -> Vec<Screen> {
        ViewQuery {
            status: Some(ScreenStatus::Production),
            month: None,
            search: term.to_string(),
        }
        .apply(self.registry.screens())
    }

    /// Recorded screens, newest first, optionally narrowed to one month.
    pub fn awaiting_delivery(&self, month: Option<MonthKey>, term: &str) -> Vec<Screen> {
        ViewQuery {
            status: Some(ScreenStatus::Recorded),
            month,
            search: term.to_string(),
        }
        .apply(self.registry.screens())
    }

    /// Search every screen regardless of stage.
    pub fn search(&self, term: &str) -> Vec<Screen> {
        ViewQuery {
            status: None,
            month: None,
            search: term.to_string(),
        }
        .apply(self.registry.screens())
    }

    /// Report over everything registered in one month.
    pub fn monthly_report(&self, month: MonthKey) -> MonthlyReport {
        query::monthly_report(self.registry.screens(), month)
    }

    /// Month of "now" according to the injected clock.
    pub fn current_month(&self) -> MonthKey {
        MonthKey::of(&self.clock.now())
    }

    /// Today according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }
}
