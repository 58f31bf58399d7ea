// Domain Layer - Pure business logic and entities

pub mod error;
pub mod registry;
pub mod screen;
pub mod settings;

// Re-exports
pub use error::{DomainError, Result};
pub use registry::ScreenRegistry;
pub use screen::{
    Deadline, Delivery, DeliveryMethod, Recording, Screen, ScreenId, ScreenStatus, TimeSlot,
    Weekday,
};
pub use settings::Settings;
