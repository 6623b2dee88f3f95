use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error("bulk count {requested} exceeds the limit of {max}")]
    BulkLimit { requested: u32, max: u32 },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type TodoResult<T> = Result<T, TodoError>;
