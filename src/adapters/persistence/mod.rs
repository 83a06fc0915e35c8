//! Todo repositories. Both store the flat `TodoState`, never the entity itself.

pub mod memory;
pub mod state_json;

pub use memory::InMemoryTodoRepository;
pub use state_json::JsonTodoRepository;
