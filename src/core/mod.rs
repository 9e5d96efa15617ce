//! Core components of the `istocks-core` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FmpClient`] and its builder.
//! - The [`FmpError`] taxonomy and the [`ConfigError`] raised while building a client.
//! - Externally supplied configuration ([`FmpConfig`]).
//! - The [`MarketDataService`] seam the view-state controllers depend on.
//! - Internal networking and wire helpers.

/// The main client (`FmpClient`), builder, and defaults.
pub mod client;
/// Client settings loaded from the environment or a JSON file.
pub mod config;
/// The error taxonomy (`FmpError`) and client construction errors.
pub mod error;
/// Shared model pieces used by every record type (e.g., `LocalId`).
pub mod models;
/// Service trait abstracting the three remote calls.
pub mod services;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use client::{FmpClient, FmpClientBuilder};
pub use config::FmpConfig;
pub use error::{ConfigError, FmpError};
pub use models::LocalId;
pub use services::MarketDataService;
