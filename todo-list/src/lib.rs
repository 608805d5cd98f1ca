//! Todo items and an ordered, filterable list of them.
mod error;
mod list;
pub mod seq;
mod todo;

pub use error::{Result, TodoListError};
pub use list::{HEADER_WIDTH, TodoList};
pub use todo::{DONE_MARKER, Todo, UNDONE_MARKER};
