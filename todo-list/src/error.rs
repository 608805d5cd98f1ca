use thiserror::Error;

/// Errors returned by [`TodoList`](crate::TodoList) operations.
///
/// Every variant is a violated precondition; the list is never left
/// partially modified when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoListError {
    /// An index-based access or removal fell outside `[0, size)`
    #[error("Index {index} is out of range for a list of {size} items")]
    IndexOutOfRange { index: usize, size: usize },
    /// No item carries the requested title
    #[error("No todo titled {title:?}")]
    NotFound { title: String },
}

pub type Result<T, E = TodoListError> = std::result::Result<T, E>;
