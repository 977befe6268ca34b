//! Data Transfer Objects.
//!
//! All bodies serialize camelCase to match the frontend contract.

pub mod health;
pub mod url;
