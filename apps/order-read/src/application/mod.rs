//! Application layer - ports, fetching strategies, and output DTOs.

pub mod dto;
pub mod ports;
pub mod strategies;
