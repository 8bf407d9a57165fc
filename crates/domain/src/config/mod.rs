//! Configuration module for getservers
//!
//! One file per section:
//! - `root`: main configuration, file loading and CLI overrides
//! - `server`: listen address, port and static asset hosting
//! - `upstream`: upstream listing API and refresh cadence
//! - `site`: public site identity used for meta tags
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod site;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use site::SiteConfig;
pub use upstream::UpstreamConfig;
