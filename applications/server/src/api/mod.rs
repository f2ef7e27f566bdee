/// API route modules
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod health;
pub mod playlists;
pub mod songs;

/// Build the full application router, mounted under `/api`
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        // Playlists
        .route("/playlists", post(playlists::create_playlist))
        .route(
            "/playlists/:id",
            get(playlists::get_playlist).put(playlists::update_playlist),
        )
        // Songs
        .route(
            "/playlists/:id/songs",
            get(songs::get_playlist_songs).post(songs::add_song_to_playlist),
        );

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
