use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::todo::{Progress, Todo, TodoId};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProgressRequest {
    pub id: TodoId,
    pub progress: Progress,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkSaveRequest {
    /// Number of mock todos to generate.
    #[schema(maximum = 10000)]
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkSaveResponse {
    /// Number of todos actually stored.
    pub count: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    #[param(value_type = i64)]
    pub id: TodoId,
}

/// Query for the shared `GET` route; `id` selects a single todo.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindQuery {
    /// When absent every todo is returned.
    #[param(value_type = Option<i64>)]
    pub id: Option<TodoId>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TodoResponse {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub progress: Progress,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self { id: t.id, title: t.title, content: t.content, progress: t.progress }
    }
}

/// Collections keep their items under `content` so links can sit beside them.
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoList {
    pub content: Vec<TodoResponse>,
}
