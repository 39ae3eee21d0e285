//! Walk endpoints: registration and the friends-met lookup.

use crate::api::routes::AppState;
use crate::domain::{FriendMatcher, RegisterWalkRequest, WalkId, WalkRegistry};
use crate::error::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

/// `POST /walks`: register a walk.
///
/// Unknown dog names are reported back as a 400; success executes the
/// deferred insert and answers 201 with the Location of the new walk.
pub async fn register_walk(
    State(state): State<AppState>,
    Json(request): Json<RegisterWalkRequest>,
) -> Result<Response> {
    let known_dogs = state.dogs.find_all_by_names(&request.dogs_on_walk).await?;
    let registration = WalkRegistry::register(&request, known_dogs)?;

    state.walks.insert(&registration.insert).await?;

    let location = registration.response.location();
    let body = registration.response.body();
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response())
}

/// `GET /walks/{walk_id}/friends`: which dogs from other walks were met.
///
/// An empty result is a plain 200 with no body and the picture is never
/// fetched for it; a non-empty result carries the friend names plus the
/// picture, and emits a `FriendsMet` event as a side channel.
pub async fn friends_on_walk(
    State(state): State<AppState>,
    Path(walk_id): Path<i64>,
) -> Result<Response> {
    let loaded = state.walks.find_by_id(WalkId::new(walk_id)).await?;
    let walk = FriendMatcher::validate(loaded.as_ref())?;

    let other_walks = state
        .walks
        .find_others_excluding_dogs(&walk.dog_ids())
        .await?;

    let pictures = state.pictures.clone();
    let (response, event) =
        FriendMatcher::match_friends(walk, &other_walks, move || pictures.fetch(), Utc::now());

    if let Some(event) = event {
        state.events.publish(event);
    }

    if response.is_empty() {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(Json(response).into_response())
}
