//! A consumer bound to one capability and one interchangeable strategy.

use std::sync::Arc;

use serde_json::Value;

use crate::capability::Capability;
use crate::error::{RegistryError, StrategyError};
use crate::registry::verify_conformance;
use crate::strategy::Strategy;

/// Holds exactly one strategy, chosen at construction, for the client's
/// lifetime. The client never inspects the concrete strategy type; its
/// behavior is fully determined by the strategy it was bound to, so new
/// strategies never require client changes.
pub struct Client {
    contract: Capability,
    strategy: Arc<dyn Strategy>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("contract", &self.contract)
            .field("strategy", &self.strategy.descriptor())
            .finish()
    }
}

impl Client {
    /// Bind a strategy to a capability contract.
    ///
    /// Conformance is checked here, at construction. A strategy that does
    /// not fulfil the contract is rejected with
    /// [`RegistryError::ContractViolation`], never with a call-time failure.
    pub fn bind(contract: &Capability, strategy: Arc<dyn Strategy>) -> Result<Self, RegistryError> {
        verify_conformance(contract, strategy.descriptor())?;
        Ok(Client {
            contract: contract.clone(),
            strategy,
        })
    }

    pub fn capability_id(&self) -> &str {
        &self.contract.id
    }

    pub fn strategy_id(&self) -> &str {
        &self.strategy.descriptor().id
    }

    /// Forward to the capability's sole operation.
    ///
    /// Errors with [`RegistryError::AmbiguousOperation`] when the contract
    /// declares more than one operation; use [`Client::invoke`] then.
    pub fn execute(&self, input: Value) -> Result<Value, RegistryError> {
        let ops = self.contract.operations();
        match ops {
            [only] => {
                let name = only.name.clone();
                Ok(self.invoke(&name, input)?)
            }
            _ => Err(RegistryError::AmbiguousOperation {
                capability: self.contract.id.clone(),
                count: ops.len(),
            }),
        }
    }

    /// Validate the input, delegate to the strategy, and check the output
    /// kind against the contract. The result is returned unchanged.
    pub fn invoke(&self, operation: &str, input: Value) -> Result<Value, StrategyError> {
        self.contract.check_input(operation, &input)?;
        let output = self.strategy.perform(operation, input)?;
        self.contract.check_output(operation, &output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{OperationSpec, ValueKind};
    use crate::strategy::{FnStrategy, StrategyDescriptor};
    use serde_json::json;

    fn sender_contract() -> Capability {
        Capability::new("sender").operation(
            OperationSpec::new("send", ValueKind::String, ValueKind::String).required(),
        )
    }

    fn provider(id: &str, label: &'static str) -> Arc<dyn Strategy> {
        Arc::new(FnStrategy::new(
            StrategyDescriptor::new(id).capability("sender").operation("send"),
            move |_op, input| {
                Ok(json!(format!("Sending via {}: {}", label, input.as_str().unwrap_or(""))))
            },
        ))
    }

    #[test]
    fn test_execute_forwards_to_strategy() {
        let contract = sender_contract();
        let client = Client::bind(&contract, provider("a", "A")).unwrap();
        assert_eq!(client.execute(json!("hi")).unwrap(), json!("Sending via A: hi"));
    }

    #[test]
    fn test_swapping_strategies_preserves_client_code_path() {
        let contract = sender_contract();
        for (id, label, expected) in [
            ("a", "A", "Sending via A: hi"),
            ("b", "B", "Sending via B: hi"),
        ] {
            let client = Client::bind(&contract, provider(id, label)).unwrap();
            assert_eq!(client.execute(json!("hi")).unwrap(), json!(expected));
        }
    }

    #[test]
    fn test_execute_is_idempotent() {
        let contract = sender_contract();
        let client = Client::bind(&contract, provider("a", "A")).unwrap();
        let first = client.execute(json!("hi")).unwrap();
        let second = client.execute(json!("hi")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bind_rejects_nonconforming_strategy() {
        let contract = sender_contract();
        let walker: Arc<dyn Strategy> = Arc::new(FnStrategy::new(
            StrategyDescriptor::new("penguin").capability("walker").operation("walk"),
            |_op, _input| Ok(json!("Penguin waddling on ice!")),
        ));
        let err = Client::bind(&contract, walker).unwrap_err();
        assert!(matches!(err, RegistryError::UndeclaredCapability { .. }));
    }

    #[test]
    fn test_invalid_input_recovered_locally() {
        let contract = sender_contract();
        let client = Client::bind(&contract, provider("a", "A")).unwrap();
        let err = client.execute(json!("")).unwrap_err();
        assert!(err.to_string().contains("required input is empty"));
    }

    #[test]
    fn test_execute_ambiguous_for_multi_operation_contract() {
        let contract = Capability::new("video")
            .operation(OperationSpec::new("play_video", ValueKind::Null, ValueKind::String))
            .operation(OperationSpec::new("stop_video", ValueKind::Null, ValueKind::String));
        let player: Arc<dyn Strategy> = Arc::new(FnStrategy::new(
            StrategyDescriptor::new("movie-player")
                .capability("video")
                .operation("play_video")
                .operation("stop_video"),
            |op, _input| match op {
                "play_video" => Ok(json!("Playing movie with excellent quality...")),
                "stop_video" => Ok(json!("Movie playback stopped")),
                other => Err(StrategyError::UnsupportedOperation(other.to_string())),
            },
        ));
        let client = Client::bind(&contract, player).unwrap();
        assert!(matches!(
            client.execute(json!(null)).unwrap_err(),
            RegistryError::AmbiguousOperation { .. }
        ));
        assert_eq!(
            client.invoke("stop_video", json!(null)).unwrap(),
            json!("Movie playback stopped")
        );
    }

    #[test]
    fn test_output_kind_checked_against_contract() {
        let contract = sender_contract();
        let lying: Arc<dyn Strategy> = Arc::new(FnStrategy::new(
            StrategyDescriptor::new("lying").capability("sender").operation("send"),
            |_op, _input| Ok(json!(42)),
        ));
        let client = Client::bind(&contract, lying).unwrap();
        let err = client.invoke("send", json!("hi")).unwrap_err();
        assert!(matches!(err, StrategyError::OutputMismatch { .. }));
    }
}
