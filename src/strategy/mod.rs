//! The [`Strategy`] trait and its declared-contract descriptor.

pub mod adapters;

pub use adapters::FnStrategy;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::Capability;
use crate::error::StrategyError;

/// Declared identity of a strategy: which capabilities it claims to support
/// and which operations it actually implements.
///
/// The registry checks the claim against the contract when the strategy is
/// registered, so an unfulfillable claim is rejected up front instead of
/// failing inside a client call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    pub id: String,
    capabilities: Vec<String>,
    operations: Vec<String>,
}

impl StrategyDescriptor {
    pub fn new(id: &str) -> Self {
        StrategyDescriptor {
            id: id.to_string(),
            capabilities: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Claim support for a capability by id.
    pub fn capability(mut self, capability_id: &str) -> Self {
        self.capabilities.push(capability_id.to_string());
        self
    }

    /// Declare an implemented operation.
    pub fn operation(mut self, name: &str) -> Self {
        self.operations.push(name.to_string());
        self
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    pub fn declares(&self, capability_id: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability_id)
    }

    /// Operations the contract demands but this descriptor does not declare.
    pub fn missing_operations(&self, contract: &Capability) -> Vec<String> {
        contract
            .operations()
            .iter()
            .filter(|op| !self.operations.iter().any(|have| *have == op.name))
            .map(|op| op.name.clone())
            .collect()
    }
}

/// A concrete implementation of one or more capabilities.
///
/// All calls are synchronous and must not mutate hidden state: performing
/// the same operation twice with the same input yields the same output.
pub trait Strategy: Send + Sync {
    fn descriptor(&self) -> &StrategyDescriptor;

    fn perform(&self, operation: &str, input: Value) -> Result<Value, StrategyError>;
}
