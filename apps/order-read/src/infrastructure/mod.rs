//! Infrastructure layer - adapters for the application ports.

pub mod config;
pub mod persistence;
pub mod scope;
