/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use cadence_core::AlbumTrack;
use cadence_server::{api, state::AppState};
use cadence_storage::SqliteStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a real SQLite database in a temp dir
pub struct TestApp {
    pub router: Router,
    pub store: SqliteStore,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let store = SqliteStore::connect(&db_url)
            .await
            .expect("Failed to open test database");

        let shared = Arc::new(store.clone());
        let router = api::router(AppState::new(shared.clone(), shared));

        Self {
            router,
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Seed the catalog
    pub async fn add_track(&self, track: AlbumTrack) {
        self.store
            .add_album_track(&track)
            .await
            .expect("Failed to seed catalog");
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(&self.router, method, uri, body).await
    }
}

/// Send one request through the router and decode the JSON response
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub mod fixtures {
    use cadence_core::AlbumTrack;

    pub fn a1() -> AlbumTrack {
        AlbumTrack::new("A", 1)
            .with_album_name("Album A")
            .with_song_title("A1")
    }

    pub fn b2() -> AlbumTrack {
        AlbumTrack::new("B", 2)
            .with_album_name("Album B")
            .with_song_title("B2")
    }
}
