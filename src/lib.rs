//! # capreg — capability contracts with interchangeable strategies
//!
//! `capreg` implements a small polymorphic strategy registry: a client
//! depends on an abstract **capability** (a named contract of operations
//! with fixed input/output kinds) and is configured at construction time
//! with any **strategy** that fulfils it.
//!
//! - **Registration-time checking**: a strategy's declared contract is
//!   verified against the capability when it is registered or bound, so an
//!   unfulfillable claim surfaces as [`RegistryError::ContractViolation`]
//!   up front, never as a failure inside a client call.
//! - **Minimal contracts**: capabilities stay small and disjoint; a
//!   strategy registers only the capabilities it genuinely supports.
//! - **Closed for modification**: the [`Client`] never branches on the
//!   concrete strategy type, so adding a strategy never touches client code.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use capreg::{Capability, CapabilityRegistry, FnStrategy, OperationSpec,
//!              StrategyDescriptor, ValueKind};
//! use serde_json::json;
//!
//! let mut registry = CapabilityRegistry::new();
//! registry
//!     .register_capability(Capability::new("sender").operation(
//!         OperationSpec::new("send", ValueKind::String, ValueKind::String),
//!     ))
//!     .unwrap();
//! registry
//!     .register_strategy(Arc::new(FnStrategy::new(
//!         StrategyDescriptor::new("gmail").capability("sender").operation("send"),
//!         |_op, input| Ok(json!(format!("Sending via Gmail: {}", input.as_str().unwrap()))),
//!     )))
//!     .unwrap();
//!
//! let client = registry.client("sender", "gmail").unwrap();
//! assert_eq!(client.execute(json!("hi")).unwrap(), json!("Sending via Gmail: hi"));
//! ```

pub mod capability;
pub mod client;
pub mod error;
pub mod registry;
pub mod strategy;

pub use crate::capability::{Capability, OperationSpec, ValueKind};
pub use crate::client::Client;
pub use crate::error::{RegistryError, RegistryResult, StrategyError, StrategyResult};
pub use crate::registry::{verify_conformance, CapabilityRegistry};
pub use crate::strategy::{FnStrategy, Strategy, StrategyDescriptor};
