//! Dog endpoints: create-or-find and lookup.

use crate::api::routes::AppState;
use crate::domain::{Dog, DogCreation, DogId, DogName, DogResponse, InsertDog};
use crate::error::{Error, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub birthday: NaiveDate,
}

/// `POST /dogs`: create a dog, or point at the existing one when the
/// (name, birthday) pair is already known. Never creates a duplicate.
pub async fn create_dog(
    State(state): State<AppState>,
    Json(request): Json<CreateDogRequest>,
) -> Result<Response> {
    let name = DogName::try_new(request.name)
        .map_err(|error| Error::invalid_dog_name(error.to_string()))?;

    let existing = state
        .dogs
        .find_by_name_and_birthday(&name, request.birthday)
        .await?;

    match Dog::create_or_find(name, request.birthday, existing.as_ref()) {
        DogCreation::Created(new_dog) => {
            let insert = InsertDog::new(new_dog);
            let id = state.dogs.insert(&insert).await?;
            let dog = Dog {
                id,
                name: insert.dog().name.clone(),
                birthday: insert.dog().birthday,
            };
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, format!("/dogs/{id}"))],
                Json(DogResponse::from(&dog)),
            )
                .into_response())
        }
        DogCreation::Exists(id) => Ok(Redirect::to(&format!("/dogs/{id}")).into_response()),
    }
}

/// `GET /dogs/{dog_id}`
pub async fn get_dog(State(state): State<AppState>, Path(dog_id): Path<i64>) -> Result<Response> {
    let dog = state
        .dogs
        .find_by_id(DogId::new(dog_id))
        .await?
        .ok_or(Error::DogNotFound)?;
    Ok(Json(DogResponse::from(&dog)).into_response())
}
