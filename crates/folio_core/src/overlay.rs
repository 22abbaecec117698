//! # Overlay Objects
//!
//! Display objects with an activation flag. Every activation write reaches
//! the object's observers, even when the value does not change, so callers
//! that care about cost should compare against [`Activatable::active_self`]
//! first.

use std::fmt;

/// An object whose rendering can be switched on and off.
pub trait Activatable {
    /// Returns the object's own activation flag.
    fn active_self(&self) -> bool;

    /// Writes the activation flag.
    fn set_active(&mut self, active: bool);
}

/// Callback invoked with the new flag on every activation write.
pub type ActivationObserver = Box<dyn FnMut(bool) + Send + Sync>;

/// A host display object, e.g. the camera-facing page of a book.
pub struct OverlayObject {
    name: String,
    active: bool,
    activation_writes: u64,
    observers: Vec<ActivationObserver>,
}

impl OverlayObject {
    /// Creates an overlay with the given initial activation flag.
    #[must_use]
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
            activation_writes: 0,
            observers: Vec::new(),
        }
    }

    /// Returns the overlay name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `set_active` calls received so far.
    #[inline]
    #[must_use]
    pub const fn activation_writes(&self) -> u64 {
        self.activation_writes
    }

    /// Registers an observer for activation writes.
    pub fn observe(&mut self, observer: impl FnMut(bool) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl Activatable for OverlayObject {
    #[inline]
    fn active_self(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.activation_writes += 1;
        for observer in &mut self.observers {
            observer(active);
        }
    }
}

impl fmt::Debug for OverlayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayObject")
            .field("name", &self.name)
            .field("active", &self.active)
            .field("activation_writes", &self.activation_writes)
            .field("observers", &self.observers.len())
            .finish()
    }
}
