//! Walk registration
//!
//! Turns a raw registration request into a walk the store can persist,
//! plus a creation response whose identity-bearing parts are evaluated
//! only after the insert command has run.

use crate::domain::commands::InsertWalk;
use crate::domain::dog::{Dog, DogId, DogName};
use crate::domain::publish_once::{Deferred, PublishOnce};
use crate::domain::walk::{Coordinate, NewWalk, WalkId};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw registration input: dog names plus the path walked, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWalkRequest {
    pub dogs_on_walk: Vec<String>,
    pub path: Vec<Coordinate>,
}

/// Body of a successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkResponse {
    pub id: WalkId,
    pub dogs: Vec<DogResponse>,
    pub path: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogResponse {
    pub id: DogId,
    pub name: DogName,
    pub birthday: NaiveDate,
}

impl From<&Dog> for DogResponse {
    fn from(dog: &Dog) -> Self {
        Self {
            id: dog.id,
            name: dog.name.clone(),
            birthday: dog.birthday,
        }
    }
}

/// A creation response whose Location URL and body are computed at most
/// once, on first access, and only make sense after the insert executed.
#[derive(Debug)]
pub struct CreationResponse<T> {
    location: PublishOnce<String>,
    body: PublishOnce<T>,
}

impl<T: Clone> CreationResponse<T> {
    pub fn new(
        location: impl FnOnce() -> String + Send + 'static,
        body: impl FnOnce() -> T + Send + 'static,
    ) -> Self {
        Self {
            location: PublishOnce::new(location),
            body: PublishOnce::new(body),
        }
    }

    /// Location header value.
    ///
    /// Panics if evaluated before the insert command that publishes the
    /// walk identity has executed.
    pub fn location(&self) -> String {
        self.location.force()
    }

    /// Response body. Same evaluation contract as [`Self::location`].
    pub fn body(&self) -> T {
        self.body.force()
    }
}

/// Successful outcome of [`WalkRegistry::register`]: the insert the caller
/// must execute exactly once, and the response to send afterwards.
#[derive(Debug)]
pub struct Registration {
    pub response: CreationResponse<WalkResponse>,
    pub insert: InsertWalk,
}

pub struct WalkRegistry;

impl WalkRegistry {
    /// Every requested name must resolve to a known dog. Unresolved names
    /// are reported verbatim, first occurrence only, in input order.
    pub fn validate(request: &RegisterWalkRequest, known_dogs: &[Dog]) -> Result<()> {
        let known: HashSet<&str> = known_dogs
            .iter()
            .map(|dog| dog.name.as_ref())
            .collect();

        let mut unknown: Vec<String> = Vec::new();
        for name in &request.dogs_on_walk {
            if !known.contains(name.as_str()) && !unknown.contains(name) {
                unknown.push(name.clone());
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(Error::UnknownDogs { names: unknown })
        }
    }

    /// Construct the walk and its deferred insert.
    ///
    /// The walk's identity is assigned by the store, not here; the
    /// response captures the insert command's id slot and resolves the
    /// URL and body lazily once that slot is fulfilled.
    pub fn register(request: &RegisterWalkRequest, known_dogs: Vec<Dog>) -> Result<Registration> {
        Self::validate(request, &known_dogs)?;

        let walk = NewWalk::from_coordinates(known_dogs, &request.path);
        let insert = InsertWalk::new(walk.clone());

        let dogs: Vec<DogResponse> = walk.dogs.iter().map(DogResponse::from).collect();
        let path = request.path.clone();

        let location_slot = insert.assigned_id();
        let body_slot = insert.assigned_id();
        let response = CreationResponse::new(
            move || format!("/walks/{}", assigned(&location_slot)),
            move || WalkResponse {
                id: assigned(&body_slot),
                dogs,
                path,
            },
        );

        Ok(Registration { response, insert })
    }
}

fn assigned(slot: &Deferred<WalkId>) -> WalkId {
    slot.get()
        .expect("walk identity is published by the insert command before the response is evaluated")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_dog(id: i64, name: &str) -> Dog {
        Dog {
            id: DogId::new(id),
            name: DogName::try_new(name.to_string()).unwrap(),
            birthday: NaiveDate::from_ymd_opt(2021, 5, 12).unwrap(),
        }
    }

    fn square_loop() -> Vec<Coordinate> {
        vec![
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(2, 1),
            Coordinate::new(1, 1),
        ]
    }

    #[test]
    fn all_known_names_pass_validation() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec!["Yuna".to_string()],
            path: Vec::new(),
        };
        assert!(WalkRegistry::validate(&request, &[known_dog(1, "Yuna")]).is_ok());
    }

    #[test]
    fn unknown_names_are_reported_verbatim() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec!["Rex".to_string()],
            path: Vec::new(),
        };
        let error = WalkRegistry::validate(&request, &[known_dog(1, "Yuna")]).unwrap_err();
        match error {
            Error::UnknownDogs { names } => assert_eq!(names, vec!["Rex".to_string()]),
            other => panic!("expected UnknownDogs, got {other:?}"),
        }
    }

    #[test]
    fn unknown_names_keep_input_order_without_repeats() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec![
                "Rex".to_string(),
                "Abby".to_string(),
                "Rex".to_string(),
                "Yuna".to_string(),
            ],
            path: Vec::new(),
        };
        let error = WalkRegistry::validate(&request, &[known_dog(1, "Yuna")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown dog or dogs: Rex, Abby"
        );
    }

    #[test]
    fn the_path_is_sequence_indexed_in_input_order() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec!["Yuna".to_string()],
            path: square_loop(),
        };
        let registration =
            WalkRegistry::register(&request, vec![known_dog(1, "Yuna")]).unwrap();

        let path = &registration.insert.walk().path;
        let sequences: Vec<i32> = path.iter().map(|point| point.sequence).collect();
        let coordinates: Vec<Coordinate> =
            path.iter().map(|point| point.coordinate).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
        assert_eq!(coordinates, square_loop());
    }

    #[test]
    fn the_response_resolves_after_the_insert_executes() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec!["Yuna".to_string()],
            path: square_loop(),
        };
        let registration =
            WalkRegistry::register(&request, vec![known_dog(1, "Yuna")]).unwrap();

        // the store assigns the identity when the command executes
        registration.insert.record_assigned(WalkId::new(7));

        assert_eq!(registration.response.location(), "/walks/7");
        let body = registration.response.body();
        assert_eq!(body.id, WalkId::new(7));
        assert_eq!(body.dogs.len(), 1);
        assert_eq!(body.path, square_loop());
        // repeated access observes the same cached value
        assert_eq!(registration.response.body(), body);
    }

    #[test]
    #[should_panic(expected = "published by the insert command")]
    fn evaluating_the_response_before_the_insert_is_a_caller_bug() {
        let request = RegisterWalkRequest {
            dogs_on_walk: vec!["Yuna".to_string()],
            path: Vec::new(),
        };
        let registration =
            WalkRegistry::register(&request, vec![known_dog(1, "Yuna")]).unwrap();
        let _ = registration.response.location();
    }
}
