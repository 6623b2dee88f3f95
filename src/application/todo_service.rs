use crate::domain::error::{TodoError, TodoResult};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{NewTodo, Progress, Todo, TodoId};
use async_trait::async_trait;

/// Largest mock batch a single bulk request may ask for.
pub const MAX_BULK_COUNT: u32 = 10_000;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn save(&self, input: NewTodo) -> TodoResult<Todo>;
    async fn find_all(&self) -> TodoResult<Vec<Todo>>;
    async fn find_by_id(&self, id: TodoId) -> TodoResult<Todo>;
    async fn delete_by_id(&self, id: TodoId) -> TodoResult<()>;
    async fn update_progress(&self, id: TodoId, progress: Progress) -> TodoResult<Todo>;
    /// Inserts `count` generated placeholder todos, returning how many were stored.
    async fn bulk_save(&self, count: u32) -> TodoResult<u64>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn save(&self, input: NewTodo) -> TodoResult<Todo> {
        let todo = self.repo.create(input).await?;
        tracing::info!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn find_all(&self) -> TodoResult<Vec<Todo>> { Ok(self.repo.list().await?) }

    async fn find_by_id(&self, id: TodoId) -> TodoResult<Todo> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound(id))
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoResult<()> {
        if !self.repo.delete(id).await? {
            return Err(TodoError::NotFound(id));
        }
        tracing::info!(%id, "todo deleted");
        Ok(())
    }

    async fn update_progress(&self, id: TodoId, progress: Progress) -> TodoResult<Todo> {
        let todo = self.repo.update_progress(id, progress).await?.ok_or(TodoError::NotFound(id))?;
        tracing::info!(%id, progress = progress.as_str(), "todo progress updated");
        Ok(todo)
    }

    async fn bulk_save(&self, count: u32) -> TodoResult<u64> {
        if count > MAX_BULK_COUNT {
            return Err(TodoError::BulkLimit { requested: count, max: MAX_BULK_COUNT });
        }
        if count == 0 {
            return Ok(0);
        }
        let inserted = self.repo.insert_many(mock_todos(count)).await?;
        tracing::info!(requested = count, inserted, "mock todos inserted");
        Ok(inserted)
    }
}

pub fn mock_todos(count: u32) -> Vec<NewTodo> {
    (1..=count)
        .map(|n| NewTodo {
            title: format!("Todo #{n}"),
            content: format!("Mock content #{n}"),
            progress: Progress::NotStarted,
        })
        .collect()
}
