//! Shared types for the address-book workspace.
//!
//! - [`model`] - contact record value types (`Addressee`, `Address`, `PhoneNumber`, ...)
//! - [`config`] - layered settings loaded from defaults, `abook.toml` and the environment
//! - [`error`] - core error type

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
