use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::Router;
use serde_json::{Value, json};

use bookshelf::config::LimitSettings;
use bookshelf::graphql::{build_schema, make_app};
use bookshelf::store::Library;

/// Serves a router on an ephemeral port for the duration of a test.
#[derive(Debug)]
struct TestServer {
    handle: tokio::task::JoinHandle<()>,
    socket: SocketAddr,
}

impl TestServer {
    fn spawn(router: Router) -> Self {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).unwrap();
        listener.set_nonblocking(true).unwrap();
        let socket = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });

        Self { handle, socket }
    }

    fn endpoint(&self) -> String {
        format!("http://localhost:{}/graphql", self.socket.port())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seeded_app() -> Router {
    let schema = build_schema(Arc::new(Library::seeded()), &LimitSettings::default());
    make_app(schema)
}

// =============================================================================
// HTTP transport
// =============================================================================

#[tokio::test]
async fn test_post_executes_documents() {
    let server = TestServer::spawn(seeded_app());
    let client = reqwest::Client::new();

    let body: Value = client
        .post(server.endpoint())
        .json(&json!({ "query": "{ books { name } }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 8);
    assert_eq!(books[3]["name"], "The Fellowship of the Ring");
}

#[tokio::test]
async fn test_post_accepts_variables() {
    let server = TestServer::spawn(seeded_app());
    let client = reqwest::Client::new();

    let body: Value = client
        .post(server.endpoint())
        .json(&json!({
            "query": "query($id: Int!) { book(id: $id) { name author { name } } }",
            "variables": { "id": 4 }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["book"]["name"], "The Fellowship of the Ring");
    assert_eq!(body["data"]["book"]["author"]["name"], "J. R. R. Tolkien");
}

#[tokio::test]
async fn test_mutations_persist_across_requests() {
    let server = TestServer::spawn(seeded_app());
    let client = reqwest::Client::new();

    let body: Value = client
        .post(server.endpoint())
        .json(&json!({
            "query": r#"mutation { addAuthor(name: "Brandon Sanderson") { id } }"#
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["addAuthor"]["id"], 4);

    let body: Value = client
        .post(server.endpoint())
        .json(&json!({ "query": "{ authors { id } }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["authors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_invalid_document_returns_error_envelope() {
    let server = TestServer::spawn(seeded_app());
    let client = reqwest::Client::new();

    let response = client
        .post(server.endpoint())
        .json(&json!({ "query": "{ book( }" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert!(errors[0]["message"].is_string());
}

#[tokio::test]
async fn test_get_serves_the_graphiql_explorer() {
    let server = TestServer::spawn(seeded_app());
    let client = reqwest::Client::new();

    let response = client.get(server.endpoint()).send().await.unwrap();
    assert!(response.status().is_success());

    let page = response.text().await.unwrap();
    assert!(page.contains("graphiql"));
}
