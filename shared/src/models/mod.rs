//! Data models
//!
//! Request-scoped value objects decoded from the employee endpoints.
//! Nothing here is mutated after construction or kept between calls.

pub mod employee;
pub mod field;

// Re-exports
pub use employee::*;
pub use field::*;
