use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StrategyError;

/// Classification of JSON payloads used in operation signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    /// Matches any payload, including null.
    Any,
}

impl ValueKind {
    /// The kind of a concrete value.
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether a concrete value satisfies this kind.
    pub fn admits(&self, value: &Value) -> bool {
        matches!(self, ValueKind::Any) || *self == ValueKind::of(value)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Any => "any",
        };
        f.write_str(name)
    }
}

/// A named operation with a fixed input/output signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSpec {
    pub name: String,
    pub input: ValueKind,
    pub output: ValueKind,
    /// Reject empty inputs (null, empty string, empty collection).
    #[serde(default)]
    pub required: bool,
}

impl OperationSpec {
    pub fn new(name: &str, input: ValueKind, output: ValueKind) -> Self {
        OperationSpec {
            name: name.to_string(),
            input,
            output,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn is_empty_input(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(m) => m.is_empty(),
            _ => false,
        }
    }
}

/// An abstract contract: one or more operations under a single concern.
///
/// Contracts are deliberately minimal. An operation unrelated to the
/// contract's concern belongs in a separate capability, so no strategy is
/// ever forced to implement behavior it cannot fulfil.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    operations: Vec<OperationSpec>,
}

impl Capability {
    pub fn new(id: &str) -> Self {
        Capability {
            id: id.to_string(),
            operations: Vec::new(),
        }
    }

    pub fn operation(mut self, spec: OperationSpec) -> Self {
        self.operations.push(spec);
        self
    }

    pub fn operations(&self) -> &[OperationSpec] {
        &self.operations
    }

    pub fn operation_names(&self) -> Vec<String> {
        self.operations.iter().map(|op| op.name.clone()).collect()
    }

    pub fn find_operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Validate a caller-supplied input against an operation signature.
    pub fn check_input(&self, operation: &str, input: &Value) -> Result<(), StrategyError> {
        let spec = self
            .find_operation(operation)
            .ok_or_else(|| StrategyError::UnsupportedOperation(operation.to_string()))?;
        if !spec.input.admits(input) {
            return Err(StrategyError::InvalidInput {
                operation: operation.to_string(),
                reason: format!("expected {}, got {}", spec.input, ValueKind::of(input)),
            });
        }
        if spec.required && spec.is_empty_input(input) {
            return Err(StrategyError::InvalidInput {
                operation: operation.to_string(),
                reason: "required input is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate a strategy-produced output against an operation signature.
    pub fn check_output(&self, operation: &str, output: &Value) -> Result<(), StrategyError> {
        let spec = self
            .find_operation(operation)
            .ok_or_else(|| StrategyError::UnsupportedOperation(operation.to_string()))?;
        if !spec.output.admits(output) {
            return Err(StrategyError::OutputMismatch {
                operation: operation.to_string(),
                expected: spec.output,
                actual: ValueKind::of(output),
            });
        }
        Ok(())
    }
}
