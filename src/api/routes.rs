//! Router assembly and shared handler state.

use crate::api::{dogs, walks};
use crate::application::events::EventPublisher;
use crate::error::Result;
use crate::infrastructure::{Database, DogStore, PictureStore, WalkStore};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Everything the handlers need, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub dogs: DogStore,
    pub walks: WalkStore,
    pub pictures: PictureStore,
    pub events: EventPublisher,
    pub database: Database,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/walks", post(walks::register_walk))
        .route("/walks/{walk_id}/friends", get(walks::friends_on_walk))
        .route("/dogs", post(dogs::create_dog))
        .route("/dogs/{dog_id}", get(dogs::get_dog))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode> {
    state.database.health_check().await?;
    Ok(StatusCode::OK)
}
