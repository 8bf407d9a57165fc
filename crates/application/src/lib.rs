//! getservers Application Layer
//!
//! Ports and use cases sitting between the HTTP surface and the
//! infrastructure adapters. All snapshot reads are synchronous in-memory
//! loads; only the refresh path is async because it touches the network.
pub mod ports;
pub mod use_cases;
