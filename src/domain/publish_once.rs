//! Publish-once cells
//!
//! Small synchronized memoization primitives: a value is computed or
//! published at most once and then shared across concurrent readers.
//! Written out explicitly so the at-most-once contract is visible, instead
//! of leaning on the standard library's lazy-initialization types.

use parking_lot::Mutex;
use std::fmt;

struct Memo<T> {
    compute: Option<Box<dyn FnOnce() -> T + Send>>,
    value: Option<T>,
}

/// A compute-once cell.
///
/// The closure runs on the first access; readers racing on that first
/// access block on the lock until the winning evaluation completes and
/// then observe the cached value. The closure can never run twice.
pub struct PublishOnce<T> {
    memo: Mutex<Memo<T>>,
}

impl<T: Clone> PublishOnce<T> {
    pub fn new(compute: impl FnOnce() -> T + Send + 'static) -> Self {
        Self {
            memo: Mutex::new(Memo {
                compute: Some(Box::new(compute)),
                value: None,
            }),
        }
    }

    /// Evaluate on the first call, return the cached value afterwards.
    pub fn force(&self) -> T {
        let mut memo = self.memo.lock();
        if let Some(value) = &memo.value {
            return value.clone();
        }
        let compute = memo
            .compute
            .take()
            .expect("compute closure present until first evaluation");
        let value = compute();
        memo.value = Some(value.clone());
        value
    }
}

impl<T> PublishOnce<T> {
    pub fn is_evaluated(&self) -> bool {
        self.memo.lock().value.is_some()
    }
}

impl<T> fmt::Debug for PublishOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishOnce")
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}

/// A set-once slot for a value produced elsewhere, such as a store-assigned
/// identity. The first `fulfill` wins; later attempts are rejected and the
/// original value is kept.
pub struct Deferred<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Deferred<T> {
    pub fn empty() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Publish the value. Returns false when the slot was already
    /// fulfilled.
    pub fn fulfill(&self, value: T) -> bool {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn is_fulfilled(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl<T: Clone> Deferred<T> {
    pub fn get(&self) -> Option<T> {
        self.slot.lock().clone()
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("fulfilled", &self.is_fulfilled())
            .finish()
    }
}
