//! Capability contracts: named operations with fixed signatures.

pub mod contract;

pub use contract::{Capability, OperationSpec, ValueKind};
