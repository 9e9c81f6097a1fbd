//! Shared types for the BambooHR client
//!
//! Wire models for the employee endpoints: the `Employee` record, the
//! requestable field tokens and the directory envelope.

pub mod models;

// Re-exports
pub use models::{Employee, EmployeeDirectory, EmployeeField, EmployeeFields, UnknownField};
pub use serde::{Deserialize, Serialize};
