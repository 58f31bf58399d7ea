// Tela Core - Domain Logic & Ports
// No presentation dependencies: the session shell drives everything
// through plain function calls and gets plain records back.

pub mod application;
pub mod domain;
pub mod port;

pub use application::TrackerService;
pub use domain::{DomainError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
