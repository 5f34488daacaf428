//! Closure-backed strategy adapter.

use serde_json::Value;

use super::{Strategy, StrategyDescriptor};
use crate::error::StrategyError;

type PerformFn = dyn Fn(&str, Value) -> Result<Value, StrategyError> + Send + Sync;

/// A strategy defined from a closure, for demos and tests that do not need
/// a dedicated type.
pub struct FnStrategy {
    descriptor: StrategyDescriptor,
    perform: Box<PerformFn>,
}

impl FnStrategy {
    pub fn new<F>(descriptor: StrategyDescriptor, perform: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value, StrategyError> + Send + Sync + 'static,
    {
        FnStrategy {
            descriptor,
            perform: Box::new(perform),
        }
    }
}

impl Strategy for FnStrategy {
    fn descriptor(&self) -> &StrategyDescriptor {
        &self.descriptor
    }

    fn perform(&self, operation: &str, input: Value) -> Result<Value, StrategyError> {
        (self.perform)(operation, input)
    }
}
