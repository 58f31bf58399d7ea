// Domain Layer Integration Tests
// Screen entity, state transitions and the wire format

use chrono::{NaiveDate, TimeZone, Utc};
use tela_core::domain::{
    Deadline, DeliveryMethod, DomainError, Screen, ScreenRegistry, ScreenStatus, Weekday,
};

fn may(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

fn new_screen(tracking: &str) -> Screen {
    Screen::new(
        format!("id-{}", tracking),
        may(10, 14),
        tracking,
        "Acme Estamparia",
        3,
        "Gustavo",
        Deadline {
            day: Weekday::Sexta,
            time: "15:00".parse().unwrap(),
        },
    )
}

#[test]
fn test_screen_creation_and_state() {
    let screen = new_screen("NR0001");

    assert_eq!(screen.status, ScreenStatus::Production);
    assert_eq!(screen.tracking_number, "NR0001");
    assert_eq!(screen.quantity, 3);
    assert!(screen.recording.is_none());
    assert!(screen.delivery.is_none());
}

#[test]
fn test_screen_lifecycle() {
    let mut screen = new_screen("NR0002");

    // Initial stage: Production
    assert_eq!(screen.status, ScreenStatus::Production);

    // Record: Production -> Recorded
    let date = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();
    assert!(screen.record(date, "Maria").is_ok());
    assert_eq!(screen.status, ScreenStatus::Recorded);
    let recording = screen.recording.as_ref().unwrap();
    assert_eq!(recording.date, date);
    assert_eq!(recording.recorded_by, "Maria");

    // Deliver: Recorded -> Delivered
    assert!(screen
        .deliver(DeliveryMethod::Courier, "João", may(12, 9))
        .is_ok());
    assert_eq!(screen.status, ScreenStatus::Delivered);
    let delivery = screen.delivery.as_ref().unwrap();
    assert_eq!(delivery.method, DeliveryMethod::Courier);
    assert_eq!(delivery.delivery_person, "João");
    assert_eq!(delivery.date, may(12, 9));
}

#[test]
fn test_invalid_status_transitions() {
    let mut screen = new_screen("NR0003");
    let date = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

    // Cannot deliver without recording
    let err = screen
        .deliver(DeliveryMethod::Client, "Pedro", may(11, 10))
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));

    // Record successfully
    assert!(screen.record(date, "Maria").is_ok());

    // Cannot record again
    assert!(screen.record(date, "Pedro").is_err());

    // Deliver successfully, then neither transition applies any more
    assert!(screen
        .deliver(DeliveryMethod::Client, "Pedro", may(12, 10))
        .is_ok());
    assert!(screen.record(date, "Maria").is_err());
    assert!(screen
        .deliver(DeliveryMethod::Mail, "Maria", may(13, 10))
        .is_err());
}

#[test]
fn test_failed_transition_keeps_existing_details() {
    let mut screen = new_screen("NR0004");
    let date = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

    screen.record(date, "Maria").unwrap();
    screen
        .deliver(DeliveryMethod::Courier, "João", may(12, 9))
        .unwrap();

    // A rejected re-recording must not clear what is already set.
    assert!(screen.record(date, "Pedro").is_err());
    assert_eq!(
        screen.recording.as_ref().map(|r| r.recorded_by.as_str()),
        Some("Maria")
    );
    assert_eq!(
        screen.delivery.as_ref().map(|d| d.delivery_person.as_str()),
        Some("João")
    );
}

#[test]
fn test_registry_keeps_registration_order() {
    let mut registry = ScreenRegistry::new();
    for tracking in ["NR0001", "NR0002", "NR0003"] {
        registry.append(new_screen(tracking));
    }

    assert_eq!(registry.len(), 3);
    let trackings: Vec<&str> = registry
        .screens()
        .iter()
        .map(|s| s.tracking_number.as_str())
        .collect();
    assert_eq!(trackings, vec!["NR0001", "NR0002", "NR0003"]);
}

#[test]
fn test_registry_lookup_unknown_id() {
    let registry = ScreenRegistry::new();
    assert!(registry.get("missing").is_none());
    assert!(!registry.contains("missing"));
}

#[test]
fn test_screen_serialization() {
    let mut screen = new_screen("NR0005");
    screen
        .record(NaiveDate::from_ymd_opt(2024, 5, 11).unwrap(), "Maria")
        .unwrap();
    screen
        .deliver(DeliveryMethod::Courier, "João", may(12, 9))
        .unwrap();

    let json = serde_json::to_string(&screen).expect("serialize");

    // The wire format carries Portuguese labels and camelCase field names.
    assert!(json.contains("\"trackingNumber\":\"NR0005\""));
    assert!(json.contains("\"clientName\":\"Acme Estamparia\""));
    assert!(json.contains("\"artFinisher\":\"Gustavo\""));
    assert!(json.contains("\"status\":\"Retirada\""));
    assert!(json.contains("\"day\":\"Sexta\""));
    assert!(json.contains("\"time\":\"15:00\""));
    assert!(json.contains("\"recordedBy\":\"Maria\""));
    assert!(json.contains("\"method\":\"Motoboy\""));
    assert!(json.contains("\"deliveryPerson\":\"João\""));

    let deserialized: Screen = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(screen.id, deserialized.id);
    assert_eq!(screen.status, deserialized.status);
    assert_eq!(screen.deadline, deserialized.deadline);
    assert_eq!(screen.recording, deserialized.recording);
    assert_eq!(screen.delivery, deserialized.delivery);
}

#[test]
fn test_status_serialization_uses_portuguese_labels() {
    let labels: Vec<String> = ScreenStatus::ALL
        .iter()
        .map(|s| serde_json::to_string(s).expect("serialize"))
        .collect();
    assert_eq!(labels, vec!["\"Em Produção\"", "\"Gravada\"", "\"Retirada\""]);
}
