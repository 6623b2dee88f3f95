use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    repository::TodoRepository,
    todo::{NewTodo, Progress, Todo, TodoId},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url `{database_url}`"))?
            .create_if_missing(true);

        // Each in-memory connection is its own database, so keep exactly one alive.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                progress TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: NewTodo) -> Result<Todo> {
        let result = sqlx::query("INSERT INTO todos (title, content, progress) VALUES (?1, ?2, ?3)")
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.progress.as_str())
            .execute(&*self.pool)
            .await?;
        Ok(Todo {
            id: TodoId(result.last_insert_rowid()),
            title: input.title,
            content: input.content,
            progress: input.progress,
        })
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let row = sqlx::query("SELECT id, title, content, progress FROM todos WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_todo).transpose()
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query("SELECT id, title, content, progress FROM todos ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;
        rows.into_iter().map(row_to_todo).collect()
    }

    async fn update_progress(&self, id: TodoId, progress: Progress) -> Result<Option<Todo>> {
        let row = sqlx::query("UPDATE todos SET progress = ?2 WHERE id = ?1 RETURNING id, title, content, progress")
            .bind(id.0)
            .bind(progress.as_str())
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_todo).transpose()
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_many(&self, inputs: Vec<NewTodo>) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for input in &inputs {
            let result = sqlx::query("INSERT INTO todos (title, content, progress) VALUES (?1, ?2, ?3)")
                .bind(&input.title)
                .bind(&input.content)
                .bind(input.progress.as_str())
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn row_to_todo(row: SqliteRow) -> Result<Todo> {
    let id: i64 = row.try_get("id")?;
    let title: String = row.try_get("title")?;
    let content: String = row.try_get("content")?;
    let progress_str: String = row.try_get("progress")?;

    let progress = progress_str
        .parse::<Progress>()
        .with_context(|| format!("corrupt progress on todo {id}"))?;

    Ok(Todo { id: TodoId(id), title, content, progress })
}
