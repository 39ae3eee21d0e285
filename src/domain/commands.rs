//! Deferred persistence commands
//!
//! Handlers decide, callers execute: each command is a value object
//! carrying the entity to insert, so unit tests can assert on the decision
//! without touching storage. The store executing an [`InsertWalk`]
//! publishes the assigned identity into the command's id slot, which the
//! registration response reads lazily.

use crate::domain::dog::NewDog;
use crate::domain::publish_once::Deferred;
use crate::domain::walk::{NewWalk, WalkId};
use std::sync::Arc;

/// Pending insert of a walk. Must be executed exactly once.
#[derive(Debug, Clone)]
pub struct InsertWalk {
    walk: NewWalk,
    assigned: Arc<Deferred<WalkId>>,
}

impl InsertWalk {
    pub fn new(walk: NewWalk) -> Self {
        Self {
            walk,
            assigned: Arc::new(Deferred::empty()),
        }
    }

    pub fn walk(&self) -> &NewWalk {
        &self.walk
    }

    /// Handle to the slot the assigned identity is published into.
    pub fn assigned_id(&self) -> Arc<Deferred<WalkId>> {
        Arc::clone(&self.assigned)
    }

    /// Record the identity assigned by the store. The first execution
    /// wins; re-running the command cannot reassign the identity.
    pub fn record_assigned(&self, id: WalkId) -> bool {
        self.assigned.fulfill(id)
    }
}

/// Pending insert of a dog. Must be executed exactly once.
#[derive(Debug, Clone)]
pub struct InsertDog {
    dog: NewDog,
}

impl InsertDog {
    pub fn new(dog: NewDog) -> Self {
        Self { dog }
    }

    pub fn dog(&self) -> &NewDog {
        &self.dog
    }
}
