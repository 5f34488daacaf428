use thiserror::Error;

use crate::capability::ValueKind;

/// Call-level errors surfaced when a client invokes a strategy.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Invalid input for operation '{operation}': {reason}")]
    InvalidInput { operation: String, reason: String },
    #[error("Operation not supported: {0}")]
    UnsupportedOperation(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Operation '{operation}' returned {actual}, contract declares {expected}")]
    OutputMismatch {
        operation: String,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StrategyError {
    fn from(e: serde_json::Error) -> Self {
        StrategyError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_error_display() {
        assert_eq!(
            StrategyError::InvalidInput {
                operation: "send".into(),
                reason: "empty payload".into()
            }
            .to_string(),
            "Invalid input for operation 'send': empty payload"
        );
        assert_eq!(
            StrategyError::UnsupportedOperation("fly".into()).to_string(),
            "Operation not supported: fly"
        );
        assert_eq!(
            StrategyError::ExecutionError("boom".into()).to_string(),
            "Execution error: boom"
        );
    }

    #[test]
    fn test_strategy_error_output_mismatch() {
        let err = StrategyError::OutputMismatch {
            operation: "send".into(),
            expected: ValueKind::String,
            actual: ValueKind::Number,
        };
        let msg = err.to_string();
        assert!(msg.contains("send"));
        assert!(msg.contains("string"));
        assert!(msg.contains("number"));
    }
}
