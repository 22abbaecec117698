//! # Object Handles
//!
//! Host objects live behind [`Shared`] handles owned by the scene (or the
//! host). Components that only observe or drive an object hold a [`Binding`],
//! which never keeps its target alive.
//!
//! ```text
//!   Scene ──owns──▶ Shared<Book> ◀──weak── Binding<Book> (toggle)
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

/// Owning, shareable handle to a host object.
pub type Shared<T> = Arc<RwLock<T>>;

/// Wraps a value in a new [`Shared`] handle.
#[inline]
#[must_use]
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

/// Non-owning association to a host object.
///
/// A binding whose target has been dropped behaves exactly like no binding.
pub struct Binding<T> {
    target: Weak<RwLock<T>>,
}

impl<T> Binding<T> {
    /// Creates a binding to `target` without taking ownership.
    #[inline]
    #[must_use]
    pub fn new(target: &Shared<T>) -> Self {
        Self {
            target: Arc::downgrade(target),
        }
    }

    /// Returns the target if it is still alive.
    #[inline]
    #[must_use]
    pub fn upgrade(&self) -> Option<Shared<T>> {
        self.target.upgrade()
    }

    /// Returns true while the target is still alive.
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Returns true if both bindings point at the same object.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.target.ptr_eq(&other.target)
    }

    /// Returns true if this binding points at `target`.
    #[inline]
    #[must_use]
    pub fn points_to(&self, target: &Shared<T>) -> bool {
        Weak::ptr_eq(&self.target, &Arc::downgrade(target))
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            target: Weak::clone(&self.target),
        }
    }
}

impl<T> From<&Shared<T>> for Binding<T> {
    fn from(target: &Shared<T>) -> Self {
        Self::new(target)
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("alive", &self.is_alive())
            .finish()
    }
}
