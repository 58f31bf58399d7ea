// Screen Domain Model
//
// One screen = one unit of print work, tracked from registration until it
// leaves the shop. The wire format carries the shop's Portuguese labels
// (stage/method/weekday names) and camelCase field names.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Result};

/// Screen ID (UUID v4 in production, injected via the id port)
pub type ScreenId = String;

/// Lifecycle stage. Only forward transitions exist; there is no
/// cancellation, rejection or reopening path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenStatus {
    /// Registered, artwork being produced ("Em Produção")
    #[serde(rename = "Em Produção")]
    Production,
    /// Artwork burned onto the mesh ("Gravada")
    #[serde(rename = "Gravada")]
    Recorded,
    /// Handed over to the client ("Retirada")
    #[serde(rename = "Retirada")]
    Delivered,
}

impl ScreenStatus {
    pub const ALL: [ScreenStatus; 3] = [
        ScreenStatus::Production,
        ScreenStatus::Recorded,
        ScreenStatus::Delivered,
    ];
}

impl std::fmt::Display for ScreenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenStatus::Production => write!(f, "Production"),
            ScreenStatus::Recorded => write!(f, "Recorded"),
            ScreenStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// Working days of the shop week (closed on Sundays). The Portuguese
/// labels are the canonical display and wire forms; parsing also accepts
/// the unaccented spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Segunda,
    #[serde(rename = "Terça")]
    Terca,
    Quarta,
    Quinta,
    Sexta,
    #[serde(rename = "Sábado")]
    Sabado,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Segunda,
        Weekday::Terca,
        Weekday::Quarta,
        Weekday::Quinta,
        Weekday::Sexta,
        Weekday::Sabado,
    ];
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weekday::Segunda => write!(f, "Segunda"),
            Weekday::Terca => write!(f, "Terça"),
            Weekday::Quarta => write!(f, "Quarta"),
            Weekday::Quinta => write!(f, "Quinta"),
            Weekday::Sexta => write!(f, "Sexta"),
            Weekday::Sabado => write!(f, "Sábado"),
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "segunda" => Ok(Weekday::Segunda),
            "terça" | "terca" => Ok(Weekday::Terca),
            "quarta" => Ok(Weekday::Quarta),
            "quinta" => Ok(Weekday::Quinta),
            "sexta" => Ok(Weekday::Sexta),
            "sábado" | "sabado" => Ok(Weekday::Sabado),
            other => Err(DomainError::ValidationError(format!(
                "unknown weekday: {}",
                other
            ))),
        }
    }
}

/// One of the eight fixed hourly deadline slots the shop hands work over
/// at, "10:00" through "17:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST_HOUR: u8 = 10;
    pub const LAST_HOUR: u8 = 17;

    pub fn new(hour: u8) -> Result<Self> {
        if !(Self::FIRST_HOUR..=Self::LAST_HOUR).contains(&hour) {
            return Err(DomainError::ValidationError(format!(
                "time slot must be a full hour between {}:00 and {}:00",
                Self::FIRST_HOUR,
                Self::LAST_HOUR
            )));
        }
        Ok(TimeSlot(hour))
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    /// All slots, earliest first.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR).map(TimeSlot)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || {
            DomainError::ValidationError(format!(
                "invalid time slot: {} (expected HH:00 between {}:00 and {}:00)",
                s,
                Self::FIRST_HOUR,
                Self::LAST_HOUR
            ))
        };
        let (hour, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if minutes != "00" {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        Self::new(hour).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> String {
        slot.to_string()
    }
}

/// How a finished screen left the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryMethod {
    /// Motorcycle courier ("Motoboy")
    #[serde(rename = "Motoboy")]
    Courier,
    /// Picked up by the client ("Cliente")
    #[serde(rename = "Cliente")]
    Client,
    /// Posted ("Correio")
    #[serde(rename = "Correio")]
    Mail,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 3] = [
        DeliveryMethod::Courier,
        DeliveryMethod::Client,
        DeliveryMethod::Mail,
    ];
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryMethod::Courier => write!(f, "Courier"),
            DeliveryMethod::Client => write!(f, "Client"),
            DeliveryMethod::Mail => write!(f, "Mail"),
        }
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "courier" | "motoboy" => Ok(DeliveryMethod::Courier),
            "client" | "cliente" => Ok(DeliveryMethod::Client),
            "mail" | "correio" => Ok(DeliveryMethod::Mail),
            other => Err(DomainError::ValidationError(format!(
                "unknown delivery method: {}",
                other
            ))),
        }
    }
}

/// Weekly deadline for a screen: shop weekday plus one of the fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub day: Weekday,
    pub time: TimeSlot,
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Recording details, set exactly once at Production -> Recorded and never
/// cleared afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub date: NaiveDate,
    pub recorded_by: String,
}

/// Delivery details, set exactly once at Recorded -> Delivered and never
/// cleared afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub method: DeliveryMethod,
    pub delivery_person: String,
    pub date: DateTime<Utc>,
}

/// Screen entity, owned exclusively by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: ScreenId,
    /// Shop-assigned 6-character job number. Not checked for uniqueness.
    pub tracking_number: String,
    pub client_name: String,
    pub quantity: u32,
    pub art_finisher: String,
    pub deadline: Deadline,
    pub status: ScreenStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording: Option<Recording>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    pub created_at: DateTime<Utc>,
}

impl Screen {
    /// Create a new screen in Production.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique screen id (injected, not generated)
    /// * `created_at` - Creation instant (injected, not system time)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        tracking_number: impl Into<String>,
        client_name: impl Into<String>,
        quantity: u32,
        art_finisher: impl Into<String>,
        deadline: Deadline,
    ) -> Self {
        Self {
            id: id.into(),
            tracking_number: tracking_number.into(),
            client_name: client_name.into(),
            quantity,
            art_finisher: art_finisher.into(),
            deadline,
            status: ScreenStatus::Production,
            recording: None,
            delivery: None,
            created_at,
        }
    }

    /// Transition Production -> Recorded. Any other starting stage is
    /// rejected, so an already recorded or delivered screen can never be
    /// re-recorded.
    pub fn record(&mut self, date: NaiveDate, recorded_by: impl Into<String>) -> Result<()> {
        if self.status != ScreenStatus::Production {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: ScreenStatus::Recorded.to_string(),
            });
        }
        self.recording = Some(Recording {
            date,
            recorded_by: recorded_by.into(),
        });
        self.status = ScreenStatus::Recorded;
        Ok(())
    }

    /// Transition Recorded -> Delivered with the hand-over instant.
    /// Rejected from any other stage.
    pub fn deliver(
        &mut self,
        method: DeliveryMethod,
        delivery_person: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if self.status != ScreenStatus::Recorded {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: ScreenStatus::Delivered.to_string(),
            });
        }
        self.delivery = Some(Delivery {
            method,
            delivery_person: delivery_person.into(),
            date: now,
        });
        self.status = ScreenStatus::Delivered;
        Ok(())
    }

    /// Create a test screen with deterministic id and timestamp.
    ///
    /// Ids are screen-1, screen-2, ... and `created_at` steps one hour at a
    /// time from a fixed base instant.
    ///
    /// **Note**: This method should only be used in tests. For production
    /// code, always inject id and time via the ports.
    pub fn new_test(tracking_number: impl Into<String>, client_name: impl Into<String>) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

        let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let base = Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .single()
            .expect("fixed test instant");
        Self::new(
            format!("screen-{}", counter),
            base + Duration::hours(counter as i64),
            tracking_number,
            client_name,
            1,
            "Gustavo",
            Deadline {
                day: Weekday::Segunda,
                time: TimeSlot(TimeSlot::FIRST_HOUR),
            },
        )
    }
}
