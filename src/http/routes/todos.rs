use axum::{extract::State, routing::{get, post}, Router, Json};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ::http::header::LOCATION;
use utoipa::OpenApi;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{NewTodo, TodoId};
use crate::http::dto::{BulkSaveRequest, BulkSaveResponse, FindQuery, IdQuery, TodoList, TodoResponse, UpdateProgressRequest};
use crate::http::links::{self, Linked};
use crate::http::types::{ApiError, ErrorBody, JsonBody, QueryParams};

pub const TAG: &str = "Todo v1.0 API";

#[derive(OpenApi)]
#[openapi(
    paths(create_todo, find_todos, list_todos, delete_todo, update_progress, bulk_create),
    tags((name = "Todo v1.0 API", description = "Todo list operations")),
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route(
            links::COLLECTION,
            post(create_todo::<S>).get(find_todos::<S>).patch(update_progress::<S>).delete(delete_todo::<S>),
        )
        .route(links::LIST, get(list_todos::<S>))
        .route(links::BULK, post(bulk_create::<S>))
        .with_state(state)
}

/// Create a todo
///
/// Stores a todo built from the given title and content.
#[utoipa::path(
    post,
    path = "/api/v1/todo",
    operation_id = "save",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = Linked<TodoResponse>,
            headers(("location" = String, description = "Where the new todo can be fetched"))),
        (status = 400, description = "Malformed body", body = ErrorBody)
    ),
    tag = "Todo v1.0 API"
)]
async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, JsonBody(payload): JsonBody<NewTodo>) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.save(payload).await?;
    let location = links::item(todo.id);
    let body = Linked::new(TodoResponse::from(todo))
        .link("detail", location.clone())
        .link("list", links::LIST);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(body)))
}

/// List todos or find one by id
///
/// Returns every todo, or only the one named by `id` when it is given.
#[utoipa::path(
    get,
    path = "/api/v1/todo",
    operation_id = "find",
    params(FindQuery),
    responses(
        (status = 200, description = "The todo named by `id`, or all todos", body = Linked<TodoResponse>),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody)
    ),
    tag = "Todo v1.0 API"
)]
async fn find_todos<S: TodoService>(State(state): State<AppState<S>>, QueryParams(query): QueryParams<FindQuery>) -> Result<Response, ApiError> {
    match query.id {
        Some(id) => Ok(find_by_id(&state.service, id).await?.into_response()),
        None => Ok(find_all(&state.service).await?.into_response()),
    }
}

/// List todos
///
/// Returns every todo ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/todo/list",
    operation_id = "findAll",
    responses((status = 200, description = "All todos", body = Linked<TodoList>)),
    tag = "Todo v1.0 API"
)]
async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Linked<TodoList>>, ApiError> {
    find_all(&state.service).await
}

async fn find_all<S: TodoService>(service: &S) -> Result<Json<Linked<TodoList>>, ApiError> {
    let todos = service.find_all().await?;
    let body = Linked::new(TodoList { content: todos.into_iter().map(TodoResponse::from).collect() })
        .templated_item("detail")
        .link("update", links::COLLECTION)
        .templated_item("delete");
    Ok(Json(body))
}

async fn find_by_id<S: TodoService>(service: &S, id: TodoId) -> Result<Json<Linked<TodoResponse>>, ApiError> {
    let todo = service.find_by_id(id).await?;
    let body = Linked::new(TodoResponse::from(todo))
        .link("update", links::COLLECTION)
        .link("delete", links::item(id))
        .link("list", links::LIST);
    Ok(Json(body))
}

/// Delete a todo
///
/// Removes the todo named by `id`.
#[utoipa::path(
    delete,
    path = "/api/v1/todo",
    operation_id = "delete",
    params(IdQuery),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Missing or non-integer id", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody)
    ),
    tag = "Todo v1.0 API"
)]
async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, QueryParams(query): QueryParams<IdQuery>) -> Result<StatusCode, ApiError> {
    state.service.delete_by_id(query.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update todo progress
///
/// Sets the progress of the todo named by `id`; nothing else changes.
#[utoipa::path(
    patch,
    path = "/api/v1/todo",
    operation_id = "update",
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Updated todo", body = Linked<TodoResponse>),
        (status = 400, description = "Malformed body or unknown progress", body = ErrorBody),
        (status = 404, description = "No todo with that id", body = ErrorBody)
    ),
    tag = "Todo v1.0 API"
)]
async fn update_progress<S: TodoService>(State(state): State<AppState<S>>, JsonBody(payload): JsonBody<UpdateProgressRequest>) -> Result<Json<Linked<TodoResponse>>, ApiError> {
    let todo = state.service.update_progress(payload.id, payload.progress).await?;
    let body = Linked::new(TodoResponse::from(todo))
        .link("detail", links::item(payload.id))
        .link("list", links::LIST);
    Ok(Json(body))
}

/// Bulk create mock todos
///
/// Generates `count` placeholder todos and returns how many were stored.
#[utoipa::path(
    post,
    path = "/api/v1/todo/bulk",
    operation_id = "bulkSave",
    request_body = BulkSaveRequest,
    responses(
        (status = 201, description = "Mock todos created", body = Linked<BulkSaveResponse>),
        (status = 400, description = "Malformed body or count above the limit", body = ErrorBody)
    ),
    tag = "Todo v1.0 API"
)]
async fn bulk_create<S: TodoService>(State(state): State<AppState<S>>, JsonBody(payload): JsonBody<BulkSaveRequest>) -> Result<impl IntoResponse, ApiError> {
    let count = state.service.bulk_save(payload.count).await?;
    let body = Linked::new(BulkSaveResponse { count })
        .templated_item("detail")
        .link("list", links::LIST);
    Ok((StatusCode::CREATED, [(LOCATION, links::COLLECTION)], Json(body)))
}
