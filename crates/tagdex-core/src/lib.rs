//! Tagdex Core Library
//!
//! Configuration and error types shared across the gateway crates.

pub mod config;
pub mod error;

pub use config::{Settings, DEFAULT_NEO4J_URI};
pub use error::{TagdexError, TagdexResult};
