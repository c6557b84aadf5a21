// tasklist - persistent to-do list manager with filtered views

pub mod filter;
pub mod slot;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::Filter;
pub use slot::Slot;
pub use store::{TASKS_KEY, TaskStore};
pub use task::Task;
