//! Application use cases. Orchestrate domain logic via ports.

pub mod todo_service;

pub use todo_service::TodoService;
