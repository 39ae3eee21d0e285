//! Friend matching
//!
//! Decides, for a loaded walk and the co-occurring walks that share no dog
//! with it, which other dogs were encountered and whether that warrants a
//! picture and a notification event.

use crate::domain::dog::DogName;
use crate::domain::events::DomainEvent;
use crate::domain::walk::Walk;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Friends found on a walk, with an illustrative picture when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<DogName>,
    #[serde(with = "picture_bytes")]
    pub picture_of_friends: Vec<u8>,
}

impl FriendsResponse {
    pub fn empty() -> Self {
        Self {
            friends: Vec::new(),
            picture_of_friends: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

/// Picture bytes travel as base64 text in JSON.
mod picture_bytes {
    use super::{Engine, BASE64};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded).map_err(serde::de::Error::custom)
    }
}

pub struct FriendMatcher;

impl FriendMatcher {
    /// The referenced walk must exist before any matching runs.
    pub fn validate(walk: Option<&Walk>) -> Result<&Walk> {
        walk.ok_or(Error::WalkNotFound)
    }

    /// Compute the dogs met on a walk.
    ///
    /// `other_walks` is expected to be pre-filtered by the caller to walks
    /// whose dog set is disjoint from `walk`'s. Dogs of `walk` showing up
    /// anyway are dropped by the identity difference, and an all-dropped
    /// result takes the empty branch.
    ///
    /// The picture fetch runs only when at least one friend was met, and
    /// at most once. `now` is carried for future time-windowing and does
    /// not influence matching.
    pub fn match_friends(
        walk: &Walk,
        other_walks: &[Walk],
        fetch_picture: impl FnOnce() -> Vec<u8>,
        now: DateTime<Utc>,
    ) -> (FriendsResponse, Option<DomainEvent>) {
        if other_walks.is_empty() {
            return (FriendsResponse::empty(), None);
        }

        // Seeding the seen-set with the walk's own dogs folds the union
        // dedup and the set difference into one pass, first-seen order.
        let mut seen = walk.dog_ids();
        let mut friends: Vec<DogName> = Vec::new();
        for other in other_walks {
            for dog in &other.dogs {
                if seen.insert(dog.id) {
                    friends.push(dog.name.clone());
                }
            }
        }

        if friends.is_empty() {
            return (FriendsResponse::empty(), None);
        }

        debug!(walk_id = %walk.id, friend_count = friends.len(), %now, "met friends on walk");

        let event = DomainEvent::friends_met(friends.clone());
        let response = FriendsResponse {
            friends,
            picture_of_friends: fetch_picture(),
        };
        (response, Some(event))
    }
}
