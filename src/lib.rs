//! todo-slim: Single-owner todos with deadlines and reminders, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
