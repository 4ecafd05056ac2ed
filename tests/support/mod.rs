// Stub carpool API and graph API shared by the integration tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};

pub const EMAIL: &str = "rider@example.com";
pub const PASSWORD: &str = "secret";
pub const EMAIL_SESSION: &str = "email-session";
pub const OAUTH_SESSION: &str = "oauth-session";
pub const FACEBOOK_TOKEN: &str = "fb-token";
// Graph token whose picture request fails upstream.
pub const NO_PICTURE_TOKEN: &str = "no-picture";
pub const AVATAR_URL: &str = "https://cdn.example.com/avatar.jpg";

type Reply = (StatusCode, Json<Value>);

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the stub server is running and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Own OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));
                axum::serve(listener, app()).await.expect("stub server failed");
            });
        });
        wait_for_server(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

pub fn graph_url() -> url::Url {
    url::Url::parse(&format!("{}/graph/", ensure_server())).expect("graph url")
}

fn wait_for_server(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };
    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("stub server did not become ready in time");
}

fn app() -> Router {
    Router::new()
        .route("/api/v1/sessions", post(create_session))
        .route("/api/v1/users", post(register))
        .route("/api/v1/users/me", get(profile))
        .route("/api/v1/events/{event_id}/responses", post(respond))
        .route("/graph/me", get(graph_me))
        .route("/graph/me/picture", get(graph_picture))
}

fn error(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "message": message })))
}

async fn create_session(Json(params): Json<HashMap<String, String>>) -> Reply {
    if params.get("oauth_access_token").map(String::as_str) == Some(FACEBOOK_TOKEN) {
        return (
            StatusCode::OK,
            Json(json!({ "data": { "token": OAUTH_SESSION, "account_setup_complete": false } })),
        );
    }

    match (
        params.get("email").map(String::as_str),
        params.get("password").map(String::as_str),
    ) {
        (Some(EMAIL), Some(PASSWORD)) => (
            StatusCode::OK,
            Json(json!({ "data": { "token": EMAIL_SESSION, "account_setup_complete": true } })),
        ),
        // Well-formed HTTP, malformed envelope.
        (Some("broken@example.com"), _) => (StatusCode::OK, Json(json!({ "data": {} }))),
        _ => error(StatusCode::UNAUTHORIZED, "invalid credentials"),
    }
}

async fn register(Json(params): Json<HashMap<String, String>>) -> Reply {
    let required = ["first_name", "last_name", "email", "phone", "password"];
    if required.iter().any(|key| !params.contains_key(*key)) {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "missing registration field");
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "data": {
                "token": "new-user-session",
                "account_setup_complete": true,
                "user": { "id": 11, "email": params["email"] }
            }
        })),
    )
}

async fn profile(headers: HeaderMap) -> Reply {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some("Bearer email-session");
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "missing session");
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": {
                "first_name": "Robin",
                "last_name": "Rider",
                "email": EMAIL,
                "phone": "555-0199",
                "avatar_url": null
            }
        })),
    )
}

async fn respond(Path(event_id): Path<u64>, Json(body): Json<Value>) -> Reply {
    if body.get("commitment").and_then(Value::as_str).is_none() {
        return error(StatusCode::BAD_REQUEST, "commitment is required");
    }
    let status = match event_id {
        1 => "success",
        2 => "partial",
        _ => "failure",
    };
    (StatusCode::OK, Json(json!({ "data": { "status": status } })))
}

async fn graph_me(Query(query): Query<HashMap<String, String>>) -> Reply {
    if query.get("fields").map(String::as_str) != Some("email,name") {
        return error(StatusCode::BAD_REQUEST, "unexpected fields");
    }
    match query.get("access_token").map(String::as_str) {
        Some(FACEBOOK_TOKEN) | Some(NO_PICTURE_TOKEN) => (
            StatusCode::OK,
            Json(json!({ "id": "42", "email": "fb@example.com", "name": "Facebook User" })),
        ),
        _ => error(StatusCode::BAD_REQUEST, "invalid access token"),
    }
}

async fn graph_picture(Query(query): Query<HashMap<String, String>>) -> Reply {
    if query.get("type").map(String::as_str) != Some("large")
        || query.get("redirect").map(String::as_str) != Some("false")
    {
        return error(StatusCode::BAD_REQUEST, "unexpected picture query");
    }
    match query.get("access_token").map(String::as_str) {
        Some(FACEBOOK_TOKEN) => (
            StatusCode::OK,
            Json(json!({ "data": { "url": AVATAR_URL, "is_silhouette": false } })),
        ),
        Some(NO_PICTURE_TOKEN) => error(StatusCode::INTERNAL_SERVER_ERROR, "picture unavailable"),
        _ => error(StatusCode::BAD_REQUEST, "invalid access token"),
    }
}
