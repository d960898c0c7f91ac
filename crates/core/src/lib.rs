//! Domain types and pure business rules for the restaurant ordering backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers call into
//! these modules for validation, pricing, checkout planning and the access
//! policy.

pub mod access;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod pricing;
pub mod roles;
pub mod types;
