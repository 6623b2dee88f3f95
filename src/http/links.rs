//! HAL-style `_links` decoration for response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::todo::TodoId;

pub const COLLECTION: &str = "/api/v1/todo";
pub const LIST: &str = "/api/v1/todo/list";
pub const BULK: &str = "/api/v1/todo/bulk";
const BY_ID_TEMPLATE: &str = "/api/v1/todo{?id}";

pub fn item(id: TodoId) -> String { format!("{COLLECTION}?id={id}") }

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct Link {
    pub href: String,
    /// Set when `href` is a URI template.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

/// A response body whose fields sit next to links to related operations.
/// `T` must serialize as an object.
#[derive(Debug, Serialize, ToSchema)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    #[schema(value_type = BTreeMap<String, Link>)]
    pub links: BTreeMap<&'static str, Link>,
}

impl<T> Linked<T> {
    pub fn new(content: T) -> Self { Self { content, links: BTreeMap::new() } }

    pub fn link(mut self, rel: &'static str, href: impl Into<String>) -> Self {
        self.links.insert(rel, Link { href: href.into(), templated: false });
        self
    }

    /// Link to the by-id form of the collection when no concrete id applies.
    pub fn templated_item(mut self, rel: &'static str) -> Self {
        self.links.insert(rel, Link { href: BY_ID_TEMPLATE.to_string(), templated: true });
        self
    }
}
