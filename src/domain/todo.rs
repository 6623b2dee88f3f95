use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Progress {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Progress {
    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::NotStarted => "NOT_STARTED",
            Progress::InProgress => "IN_PROGRESS",
            Progress::Done => "DONE",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown progress value `{0}`")]
pub struct ParseProgressError(pub String);

impl FromStr for Progress {
    type Err = ParseProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Progress::NotStarted),
            "IN_PROGRESS" => Ok(Progress::InProgress),
            "DONE" => Ok(Progress::Done),
            other => Err(ParseProgressError(other.to_string())),
        }
    }
}

/// A stored todo. The id is assigned by the repository and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub progress: Progress,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NewTodo {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub progress: Progress,
}
