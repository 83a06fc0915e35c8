//! Infrastructure adapters. Implement ports.
//!
//! Storage, clock, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod persistence;
pub mod ui;
