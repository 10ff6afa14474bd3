use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, ServerState};
use service::customer::repo::InMemoryCustomerRepository;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

async fn serve(app: Router) -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

/// Server on an ephemeral port backed by the seeded in-memory store
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::new(Arc::new(InMemoryCustomerRepository::seeded()));
    serve(routes::build_router(state, CorsLayer::very_permissive())).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn find_id_by_email(app: &TestApp, email: &str) -> anyhow::Result<i64> {
    let list = client().get(app.url("/api/v1/customers")).send().await?.json::<Vec<Value>>().await?;
    list.iter()
        .find(|c| c["email"] == email)
        .and_then(|c| c["id"].as_i64())
        .ok_or_else(|| anyhow::anyhow!("{email} not listed"))
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_seeded_customers() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/v1/customers")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Vec<Value>>().await?;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0], json!({"id": 1, "name": "alex", "email": "alex@gmail.com", "age": 21, "gender": "MALE"}));
    Ok(())
}

#[tokio::test]
async fn e2e_get_missing_customer_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/v1/customers/999")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "customer with id [999] not found");
    Ok(())
}

#[tokio::test]
async fn e2e_register_update_delete_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let email = format!("alex_{}@x.com", Uuid::new_v4());

    // Register
    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "Alex", "email": email, "age": 21, "gender": "MALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let id = find_id_by_email(&app, &email).await?;

    // Same email again -> conflict
    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "Other", "email": email, "age": 30, "gender": "FEMALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    assert_eq!(res.json::<Value>().await?["message"], "email already taken");

    // Age-only patch
    let res = c.put(app.url(&format!("/api/v1/customers/{id}")))
        .json(&json!({"age": 22}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let fetched = c.get(app.url(&format!("/api/v1/customers/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(fetched["age"], 22);
    assert_eq!(fetched["name"], "Alex");
    assert_eq!(fetched["email"], email.as_str());

    // Identical patch -> validation error
    let res = c.put(app.url(&format!("/api/v1/customers/{id}")))
        .json(&json!({"age": 22}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "no data changes found");

    // Email taken by a seeded customer -> conflict
    let res = c.put(app.url(&format!("/api/v1/customers/{id}")))
        .json(&json!({"email": "jamila@gmail.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    // Delete, then delete again -> 404
    let res = c.delete(app.url(&format!("/api/v1/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.delete(app.url(&format!("/api/v1/customers/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_register_rejects_malformed_payload() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "  ", "email": "blank@x.com", "age": 21, "gender": "MALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "NoAt", "email": "no-at-sign", "age": 21, "gender": "MALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "Young", "email": "young@x.com", "age": -1, "gender": "FEMALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["message"], "invalid age: must not be negative");

    // unknown gender never reaches the service
    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "Sam", "email": "sam@x.com", "age": 21, "gender": "OTHER"}))
        .send().await?;
    assert!(res.status().is_client_error());

    let list = c.get(app.url("/api/v1/customers")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 2);
    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_customer_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().put(app.url("/api/v1/customers/404"))
        .json(&json!({"name": "ghost"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_lists_customer_paths() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc = client().get(app.url("/api-docs/openapi.json")).send().await?.json::<Value>().await?;
    assert!(doc["paths"]["/api/v1/customers"].is_object());
    assert!(doc["paths"]["/api/v1/customers/{id}"].is_object());
    Ok(())
}

/// Full startup wiring with the ORM backend on in-memory SQLite
#[tokio::test]
async fn e2e_orm_backend_from_config() -> anyhow::Result<()> {
    let cfg = configs::load_from_str(
        r#"
        [database]
        url = "sqlite::memory:"
        max_connections = 1
        min_connections = 1

        [storage]
        backend = "orm"
        "#,
    )?;
    let app = serve(server::startup::build_app(&cfg).await?).await?;
    let c = client();

    let list = c.get(app.url("/api/v1/customers")).send().await?.json::<Vec<Value>>().await?;
    assert!(list.is_empty(), "relational stores start empty");

    let res = c.post(app.url("/api/v1/customers"))
        .json(&json!({"name": "Jamila", "email": "jamila@x.com", "age": 19, "gender": "FEMALE"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let id = find_id_by_email(&app, "jamila@x.com").await?;

    let fetched = c.get(app.url(&format!("/api/v1/customers/{id}"))).send().await?.json::<Value>().await?;
    assert_eq!(fetched["gender"], "FEMALE");
    Ok(())
}
