//! Registry of capability contracts and the strategies that fulfil them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::capability::Capability;
use crate::client::Client;
use crate::error::RegistryError;
use crate::strategy::{Strategy, StrategyDescriptor};

/// Check a strategy's declared contract against a capability.
///
/// The descriptor must claim the capability and declare every operation the
/// contract demands. Any gap is a [`RegistryError::ContractViolation`].
pub fn verify_conformance(
    contract: &Capability,
    descriptor: &StrategyDescriptor,
) -> Result<(), RegistryError> {
    if !descriptor.declares(&contract.id) {
        return Err(RegistryError::UndeclaredCapability {
            strategy: descriptor.id.clone(),
            capability: contract.id.clone(),
        });
    }
    let missing = descriptor.missing_operations(contract);
    if !missing.is_empty() {
        return Err(RegistryError::ContractViolation {
            strategy: descriptor.id.clone(),
            capability: contract.id.clone(),
            missing,
        });
    }
    Ok(())
}

/// Holds capability contracts and registered strategies.
///
/// Contracts are registered first; strategies are verified against every
/// capability they claim at registration time, so a client bound through
/// [`CapabilityRegistry::client`] can never hit a contract failure mid-call.
pub struct CapabilityRegistry {
    capabilities: HashMap<String, Capability>,
    strategies: HashMap<String, Arc<dyn Strategy>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        CapabilityRegistry {
            capabilities: HashMap::new(),
            strategies: HashMap::new(),
        }
    }

    pub fn register_capability(&mut self, contract: Capability) -> Result<(), RegistryError> {
        if contract.operations().is_empty() {
            return Err(RegistryError::EmptyContract(contract.id.clone()));
        }
        if self.capabilities.contains_key(&contract.id) {
            return Err(RegistryError::DuplicateCapability(contract.id.clone()));
        }
        tracing::debug!(capability = %contract.id, "registering capability");
        self.capabilities.insert(contract.id.clone(), contract);
        Ok(())
    }

    pub fn register_strategy(&mut self, strategy: Arc<dyn Strategy>) -> Result<(), RegistryError> {
        let descriptor = strategy.descriptor().clone();
        if self.strategies.contains_key(&descriptor.id) {
            return Err(RegistryError::DuplicateStrategy(descriptor.id));
        }
        for capability_id in descriptor.capabilities() {
            let contract = self
                .capabilities
                .get(capability_id)
                .ok_or_else(|| RegistryError::CapabilityNotFound(capability_id.clone()))?;
            if let Err(err) = verify_conformance(contract, &descriptor) {
                tracing::warn!(
                    strategy = %descriptor.id,
                    capability = %capability_id,
                    "rejecting strategy: {err}"
                );
                return Err(err);
            }
        }
        tracing::debug!(strategy = %descriptor.id, "registering strategy");
        self.strategies.insert(descriptor.id, strategy);
        Ok(())
    }

    pub fn capability(&self, id: &str) -> Option<&Capability> {
        self.capabilities.get(id)
    }

    pub fn strategy(&self, id: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies.get(id).cloned()
    }

    /// Ids of registered strategies claiming the given capability.
    pub fn strategies_for(&self, capability_id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .strategies
            .values()
            .filter(|s| s.descriptor().declares(capability_id))
            .map(|s| s.descriptor().id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn registered_capabilities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.capabilities.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Bind a client to a registered strategy for a registered capability.
    pub fn client(&self, capability_id: &str, strategy_id: &str) -> Result<Client, RegistryError> {
        let contract = self
            .capabilities
            .get(capability_id)
            .ok_or_else(|| RegistryError::CapabilityNotFound(capability_id.to_string()))?;
        let strategy = self
            .strategies
            .get(strategy_id)
            .cloned()
            .ok_or_else(|| RegistryError::StrategyNotFound(strategy_id.to_string()))?;
        Client::bind(contract, strategy)
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
