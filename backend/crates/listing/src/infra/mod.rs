//! Infrastructure Layer - Persistence

pub mod postgres;

#[cfg(test)]
pub mod memory;
