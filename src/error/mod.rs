//! Error types for the capability registry.
//!
//! - [`StrategyError`] — Errors raised while a client call is in flight.
//! - [`RegistryError`] — Registration and binding errors, including
//!   [`RegistryError::ContractViolation`].

pub mod registry_error;
pub mod strategy_error;

pub use registry_error::RegistryError;
pub use strategy_error::StrategyError;

/// Convenience alias for registry-level results.
pub type RegistryResult<T> = Result<T, RegistryError>;
/// Convenience alias for call-level results.
pub type StrategyResult<T> = Result<T, StrategyError>;
