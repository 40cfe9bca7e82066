//! Persistence Adapters
//!
//! Store implementations of the entity store port. Only the in-memory
//! adapter ships; a database-backed adapter slots in behind the same
//! port.

pub mod in_memory;

pub use in_memory::InMemoryEntityStore;
