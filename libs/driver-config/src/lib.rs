//! Configuration surface of the SQLite driver.
//!
//! Two passive pieces, tied together only by the pragma catalog:
//! - [`Pragma`]: the closed, compile-time-fixed registry of engine options,
//!   exported to generic driver-introspection tooling via
//!   [`driver_property_info`].
//! - [`Configuration`]: a defensive-copy wrapper around the raw string
//!   settings bag a caller supplies when opening a connection.
//!
//! Neither piece does I/O or holds locks; the catalog is immutable after the
//! build and safe for unsynchronized concurrent reads, and each
//! `Configuration` allocates independent output on every read.
//!
//! # Example
//! ```rust
//! use std::collections::HashMap;
//! use driver_config::{driver_property_info, Configuration, Pragma};
//!
//! let mut raw = HashMap::new();
//! raw.insert("busy_timeout".to_string(), "5000".to_string());
//!
//! let cfg = Configuration::new(&raw);
//! assert_eq!(cfg.get(Pragma::BusyTimeout), Some("5000"));
//!
//! for info in driver_property_info() {
//!     println!("{}: {}", info.name, info.description);
//! }
//! ```

pub mod config;
pub mod pragma;

pub use config::Configuration;
pub use pragma::{driver_property_info, Pragma, PropertyInfo};

use thiserror::Error;

/// Library-local result type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Typed error for strict settings-bag validation.
///
/// The tolerant path ([`Configuration::new`]) never fails; registry defects
/// (duplicate names) are compile-time failures, not values of this type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown pragma parameter: {0}")]
    UnknownPragma(String),

    #[error("Invalid value '{value}' for pragma '{key}'")]
    InvalidPragmaValue { key: String, value: String },
}
