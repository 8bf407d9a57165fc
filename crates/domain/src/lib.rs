//! getservers Domain Layer
pub mod config;
pub mod errors;
pub mod games;
pub mod snapshot;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use games::Game;
pub use snapshot::{ServerSnapshot, SnapshotHealth, SnapshotState};
