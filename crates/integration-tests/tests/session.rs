//! Session Integration Tests
//!
//! Rosters, derived views and report behavior through the session
//! service, with clock and ids pinned down.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tela_core::application::{MonthKey, RecordingForm, RegistrationForm};
use tela_core::domain::{Deadline, DomainError, ScreenStatus, Settings, Weekday};
use tela_core::port::{Clock, IdProvider};
use tela_core::TrackerService;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct SequentialIds(AtomicU64);

impl IdProvider for SequentialIds {
    fn generate_id(&self) -> String {
        format!("screen-{}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn may_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 14, 0, 0).unwrap()
}

fn service_at(now: DateTime<Utc>) -> TrackerService {
    TrackerService::new(
        Settings::default(),
        Arc::new(SequentialIds(AtomicU64::new(1))),
        Arc::new(FixedClock(now)),
    )
}

fn registration(tracking: &str, client: &str, finisher: &str) -> RegistrationForm {
    RegistrationForm {
        tracking_number: tracking.to_string(),
        client_name: client.to_string(),
        quantity: 1,
        art_finisher: finisher.to_string(),
        deadline: Deadline {
            day: Weekday::Sexta,
            time: "16:00".parse().unwrap(),
        },
    }
}

fn record_form(recorded_by: &str) -> RecordingForm {
    RecordingForm {
        date: NaiveDate::from_ymd_opt(2024, 5, 11).unwrap(),
        recorded_by: recorded_by.to_string(),
    }
}

/// Removing a finisher never touches screens already registered under
/// that name, but blocks new registrations with it.
#[test]
fn test_roster_removal_only_affects_new_registrations() {
    let mut service = service_at(may_2024());
    service
        .register(registration("NR0001", "Acme", "Gustavo"))
        .unwrap();

    assert!(service.settings_mut().remove_art_finisher("Gustavo"));
    assert_eq!(service.screens()[0].art_finisher, "Gustavo");

    let err = service
        .register(registration("NR0002", "Beta", "Gustavo"))
        .unwrap_err();
    assert!(matches!(err, DomainError::ValidationError(_)));
    assert_eq!(service.screens().len(), 1);

    println!("✅ Roster removal leaves existing screens alone");
}

/// Roster edits behave like the settings dialog: trims, rejects blanks
/// and duplicates, reports whether anything changed.
#[test]
fn test_roster_edit_rules() {
    let mut service = service_at(may_2024());
    let rosters = service.settings_mut();

    assert!(rosters.add_art_finisher("  Ana  "));
    assert!(rosters.has_art_finisher("Ana"));
    assert!(!rosters.add_art_finisher("Ana"));
    assert!(!rosters.add_art_finisher("   "));

    assert!(rosters.remove_delivery_person("Pedro"));
    assert!(!rosters.remove_delivery_person("Pedro"));
    assert!(rosters.add_delivery_person("Pedro"));
}

/// A rejected transition leaves the stored screen exactly as it was.
#[test]
fn test_failed_transition_is_atomic() {
    let mut service = service_at(may_2024());
    service
        .register(registration("NR0001", "Acme", "Gustavo"))
        .unwrap();
    service.record("screen-1", record_form("Maria")).unwrap();

    let before = service.screens()[0].clone();
    assert!(service.record("screen-1", record_form("Pedro")).is_err());
    let after = &service.screens()[0];

    assert_eq!(before.status, after.status);
    assert_eq!(before.recording, after.recording);
    assert_eq!(before.delivery, after.delivery);
}

/// The recording and delivery views narrow by stage as screens move on.
#[test]
fn test_views_follow_the_stages() {
    let mut service = service_at(may_2024());
    service
        .register(registration("NR0001", "Acme", "Gustavo"))
        .unwrap();
    service
        .register(registration("NR0002", "Beta", "Gleison"))
        .unwrap();

    assert_eq!(service.awaiting_recording("").len(), 2);
    assert!(service.awaiting_delivery(None, "").is_empty());

    service.record("screen-1", record_form("Maria")).unwrap();

    let recording_view = service.awaiting_recording("");
    assert_eq!(recording_view.len(), 1);
    assert_eq!(recording_view[0].tracking_number, "NR0002");

    let delivery_view = service.awaiting_delivery(None, "");
    assert_eq!(delivery_view.len(), 1);
    assert_eq!(delivery_view[0].tracking_number, "NR0001");

    // The delivery view narrows further by month.
    let other_month: MonthKey = "2024-06".parse().unwrap();
    assert!(service.awaiting_delivery(Some(other_month), "").is_empty());
}

/// Same-instant screens keep registration order in the views.
#[test]
fn test_views_keep_registration_order_for_equal_instants() {
    let mut service = service_at(may_2024());
    for (tracking, client) in [("NR0001", "Acme"), ("NR0002", "Beta"), ("NR0003", "Gamma")] {
        service
            .register(registration(tracking, client, "Heitor"))
            .unwrap();
    }

    let view = service.awaiting_recording("");
    let trackings: Vec<&str> = view.iter().map(|s| s.tracking_number.as_str()).collect();
    assert_eq!(trackings, vec!["NR0001", "NR0002", "NR0003"]);
}

/// Cross-stage search sees every screen; the views do not.
#[test]
fn test_search_spans_all_stages() {
    let mut service = service_at(may_2024());
    service
        .register(registration("NR0001", "Acme", "Gustavo"))
        .unwrap();
    service
        .register(registration("NR0002", "Acme Sul", "Gustavo"))
        .unwrap();
    service.record("screen-1", record_form("Maria")).unwrap();

    assert_eq!(service.search("acme").len(), 2);
    assert_eq!(service.awaiting_recording("acme").len(), 1);
    assert_eq!(service.awaiting_delivery(None, "acme").len(), 1);
    assert!(service.search("nobody").is_empty());
}

/// The report counts the clock's month and only that month.
#[test]
fn test_monthly_report_through_the_service() {
    let mut service = service_at(may_2024());
    service
        .register(registration("NR0001", "Acme", "Gustavo"))
        .unwrap();
    service
        .register(registration("NR0002", "Beta", "Gleison"))
        .unwrap();
    service.record("screen-1", record_form("Maria")).unwrap();

    assert_eq!(service.current_month().as_str(), "2024-05");
    assert_eq!(service.today(), NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());

    let report = service.monthly_report(service.current_month());
    assert_eq!(report.total, 2);
    assert!(report
        .screens
        .iter()
        .any(|s| s.status == ScreenStatus::Recorded));
    assert!(report
        .screens
        .iter()
        .any(|s| s.status == ScreenStatus::Production));

    let empty = service.monthly_report("2024-04".parse().unwrap());
    assert_eq!(empty.total, 0);
}
