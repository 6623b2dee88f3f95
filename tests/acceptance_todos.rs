use todo_api::{application::todo_service::{TodoServiceImpl, MAX_BULK_COUNT}, http::routing, http::routes::todos, infrastructure::sqlite_repo::SqliteTodoRepository};
use todo_api::domain::repository::TodoRepository;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    // use in-memory sqlite for tests
    let repo = SqliteTodoRepository::connect("sqlite::memory:").await.unwrap();
    repo.init().await.unwrap();
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_create_find_update_delete() {
    let app = app().await;

    // create
    let res = send(&app, Method::POST, "/api/v1/todo", json!({ "title": "Test", "content": "First" })).await;
    assert_eq!(res.status(), 201);
    let location = res.headers().get("location").unwrap().to_str().unwrap().to_string();
    let body = json_body(res).await;
    let id = body["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/v1/todo?id={id}"));
    assert_eq!(body["title"], "Test");
    assert_eq!(body["content"], "First");
    assert_eq!(body["progress"], "NOT_STARTED");
    assert_eq!(body["_links"]["detail"]["href"], location);
    assert_eq!(body["_links"]["list"]["href"], "/api/v1/todo/list");

    // find
    let res = get(&app, &location).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["id"], id);
    assert!(body["_links"].get("update").is_some());
    assert_eq!(body["_links"]["delete"]["href"], location);

    // update progress
    let res = send(&app, Method::PATCH, "/api/v1/todo", json!({ "id": id, "progress": "DONE" })).await;
    assert_eq!(res.status(), 200);
    let mut body = json_body(res).await;
    let links = body.as_object_mut().unwrap().remove("_links").unwrap();
    assert_eq!(body, json!({ "id": id, "title": "Test", "content": "First", "progress": "DONE" }));
    assert_eq!(links["detail"]["href"], location);

    // delete
    let res = call(&app, Method::DELETE, &location, Body::empty()).await;
    assert_eq!(res.status(), 204);
    assert!(to_bytes(res.into_body(), 1024).await.unwrap().is_empty());

    // find 404
    let res = get(&app, &location).await;
    assert_eq!(res.status(), 404);
    let body = json_body(res).await;
    assert_eq!(body["message"], format!("todo {id} not found"));
}

#[tokio::test]
async fn acceptance_list_returns_all_created() {
    let app = app().await;
    for i in 0..3 {
        let res = send(&app, Method::POST, "/api/v1/todo", json!({ "title": format!("t{i}"), "content": "c" })).await;
        assert_eq!(res.status(), 201);
    }

    for path in ["/api/v1/todo", "/api/v1/todo/list"] {
        let res = get(&app, path).await;
        assert_eq!(res.status(), 200);
        let body = json_body(res).await;
        let titles: Vec<_> = body["content"].as_array().unwrap().iter().map(|t| t["title"].clone()).collect();
        assert_eq!(titles, vec![json!("t0"), json!("t1"), json!("t2")]);
        assert_eq!(body["_links"]["detail"], json!({ "href": "/api/v1/todo{?id}", "templated": true }));
        assert_eq!(body["_links"]["update"]["href"], "/api/v1/todo");
    }
}

#[tokio::test]
async fn acceptance_bulk_create_inserts_exactly_count() {
    let app = app().await;

    let res = send(&app, Method::POST, "/api/v1/todo/bulk", json!({ "count": 5 })).await;
    assert_eq!(res.status(), 201);
    assert_eq!(res.headers().get("location").unwrap(), "/api/v1/todo");
    let body = json_body(res).await;
    assert_eq!(body["count"], 5);
    assert_eq!(body["_links"]["list"]["href"], "/api/v1/todo/list");

    let body = json_body(get(&app, "/api/v1/todo").await).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn acceptance_bulk_create_above_limit_is_rejected() {
    let app = app().await;

    for count in [MAX_BULK_COUNT as u64 + 1, u32::MAX as u64] {
        let res = send(&app, Method::POST, "/api/v1/todo/bulk", json!({ "count": count })).await;
        assert_eq!(res.status(), 400);
        let message = json_body(res).await["message"].as_str().unwrap().to_string();
        assert!(message.contains("exceeds the limit"), "{message}");
    }

    let body = json_body(get(&app, "/api/v1/todo").await).await;
    assert!(body["content"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn acceptance_missing_ids_are_not_found() {
    let app = app().await;
    assert_eq!(get(&app, "/api/v1/todo?id=77").await.status(), 404);
    assert_eq!(call(&app, Method::DELETE, "/api/v1/todo?id=77", Body::empty()).await.status(), 404);
    let res = send(&app, Method::PATCH, "/api/v1/todo", json!({ "id": 77, "progress": "IN_PROGRESS" })).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn acceptance_malformed_input_is_bad_request() {
    let app = app().await;
    let bodies = [
        (Method::POST, "/api/v1/todo", json!({ "title": "no content" })),
        (Method::PATCH, "/api/v1/todo", json!({ "id": 1, "progress": "FINISHED" })),
        (Method::POST, "/api/v1/todo/bulk", json!({ "count": -1 })),
    ];
    for (method, path, body) in bodies {
        let res = send(&app, method.clone(), path, body).await;
        assert_eq!(res.status(), 400, "{method} {path}");
        assert!(json_body(res).await["message"].is_string());
    }

    for (method, path) in [(Method::GET, "/api/v1/todo?id=abc"), (Method::DELETE, "/api/v1/todo")] {
        let res = call(&app, method.clone(), path, Body::empty()).await;
        assert_eq!(res.status(), 400, "{method} {path}");
        assert!(json_body(res).await["message"].is_string());
    }
}

#[tokio::test]
async fn acceptance_openapi_documents_every_operation() {
    let app = app().await;
    let res = get(&app, routing::OPENAPI_JSON).await;
    assert_eq!(res.status(), 200);
    let doc = json_body(res).await;

    assert!(doc["tags"].as_array().unwrap().iter().any(|t| t["name"] == todos::TAG));

    let expected = [
        ("/api/v1/todo", "post", "save"),
        ("/api/v1/todo", "get", "find"),
        ("/api/v1/todo", "patch", "update"),
        ("/api/v1/todo", "delete", "delete"),
        ("/api/v1/todo/list", "get", "findAll"),
        ("/api/v1/todo/bulk", "post", "bulkSave"),
    ];
    for (path, method, operation_id) in expected {
        let op = &doc["paths"][path][method];
        assert_eq!(op["operationId"], operation_id, "{method} {path}");
        assert_eq!(op["tags"][0], todos::TAG);
        assert!(op["summary"].is_string());
    }
    let operations: usize = doc["paths"].as_object().unwrap().values().map(|p| p.as_object().unwrap().len()).sum();
    assert_eq!(operations, expected.len());
}

#[tokio::test]
async fn acceptance_health() {
    let app = app().await;
    let res = get(&app, "/health").await;
    assert_eq!(res.status(), 200);

    let res = get(&app, "/api/v2/todo").await;
    assert_eq!(res.status(), 404);
    assert_eq!(json_body(res).await["message"], "no such route");
}

async fn json_body(res: Response<Body>) -> Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    call(app, Method::GET, uri, Body::empty()).await
}

async fn send(app: &Router, method: Method, uri: &str, json: Value) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn call(app: &Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let req = Request::builder().method(method).uri(uri).body(body).unwrap();
    app.clone().oneshot(req).await.unwrap()
}
