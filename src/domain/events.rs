//! Transient domain events
//!
//! Events here are derived notifications with no persisted lifecycle; a
//! handler returns at most one of them per request as a side channel of
//! the response, and an in-process consumer picks them up.

use crate::domain::dog::DogName;
use serde::{Deserialize, Serialize};

/// All domain events in the Dogwalk system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// Dogs from other walks were encountered on the referenced walk.
    FriendsMet { friends: Vec<DogName> },
}

impl DomainEvent {
    pub fn friends_met(friends: Vec<DogName>) -> Self {
        Self::FriendsMet { friends }
    }
}
