//! Infrastructure integrations: persistence.

pub mod persistence;
