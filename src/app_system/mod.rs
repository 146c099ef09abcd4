//! System orchestration, startup, and shutdown logic.

pub mod api_system;
pub mod config;
pub mod tracing;

pub use api_system::*;
pub use config::*;
pub use self::tracing::*;
