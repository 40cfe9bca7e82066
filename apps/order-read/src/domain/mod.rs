//! Domain layer - entities, value objects, and domain errors.

pub mod ordering;
pub mod shared;
