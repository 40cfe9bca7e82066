//! Wiring and configuration.

mod container;

pub use container::Container;
