//! Registry-level error types.

use super::StrategyError;
use thiserror::Error;

/// Errors raised while registering contracts and strategies or binding
/// clients. Contract problems surface here, at registration time, never
/// while a client call is in flight.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Contract violation: strategy '{strategy}' does not implement {missing:?} of capability '{capability}'")]
    ContractViolation {
        strategy: String,
        capability: String,
        missing: Vec<String>,
    },
    #[error("Strategy '{strategy}' does not declare capability '{capability}'")]
    UndeclaredCapability { strategy: String, capability: String },
    #[error("Capability already registered: {0}")]
    DuplicateCapability(String),
    #[error("Strategy already registered: {0}")]
    DuplicateStrategy(String),
    #[error("Capability not found: {0}")]
    CapabilityNotFound(String),
    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),
    #[error("Capability '{capability}' declares {count} operations, invoke one by name")]
    AmbiguousOperation { capability: String, count: usize },
    #[error("Capability '{0}' declares no operations")]
    EmptyContract(String),
    #[error("Strategy error: {0}")]
    StrategyError(Box<StrategyError>),
}

impl From<StrategyError> for RegistryError {
    fn from(value: StrategyError) -> Self {
        RegistryError::StrategyError(Box::new(value))
    }
}
