//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `payments` - Hosted checkout and webhook reconciliation for orders

pub mod foundation;
pub mod payments;
