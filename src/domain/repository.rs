use async_trait::async_trait;
use super::todo::{NewTodo, Progress, Todo, TodoId};

/// Persistence collaborator. Missing rows come back as `None`/`false`;
/// errors are reserved for storage failures.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn create(&self, input: NewTodo) -> anyhow::Result<Todo>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn update_progress(&self, id: TodoId, progress: Progress) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
    /// Inserts every row atomically and returns how many were written.
    async fn insert_many(&self, inputs: Vec<NewTodo>) -> anyhow::Result<u64>;
}
