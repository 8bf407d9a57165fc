pub mod client;

pub use client::HttpSnapshotFetcher;
