//! # Reference Resolver
//!
//! Fills an empty book binding from the scene, once, at activation. A binding
//! supplied at construction always wins over discovery.

use folio_core::{Binding, Scene};

/// What a call to [`ReferenceResolver::resolve`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A binding was already present; the scene was not searched.
    Preset,
    /// The scene held an instance and it was bound.
    Discovered,
    /// Nothing was bound. The slot stays empty.
    NotFound,
    /// The resolver already ran in this lifecycle; nothing was done.
    AlreadyRan,
}

/// One-shot binder for a component's book reference.
#[derive(Debug)]
pub struct ReferenceResolver {
    ran: bool,
    search_scene: bool,
}

impl ReferenceResolver {
    /// Creates a resolver that falls back to scene discovery.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ran: false,
            search_scene: true,
        }
    }

    /// Creates a resolver that only accepts injected bindings.
    #[must_use]
    pub const fn injection_only() -> Self {
        Self {
            ran: false,
            search_scene: false,
        }
    }

    /// Returns true once `resolve` has been called.
    #[inline]
    #[must_use]
    pub const fn has_run(&self) -> bool {
        self.ran
    }

    /// Turns scene discovery on or off without resetting the run state.
    pub fn set_search_scene(&mut self, search_scene: bool) {
        self.search_scene = search_scene;
    }

    /// Returns true if an empty slot falls back to scene discovery.
    #[inline]
    #[must_use]
    pub const fn searches_scene(&self) -> bool {
        self.search_scene
    }

    /// Binds `slot` to the first `T` in `scene` if it is empty.
    ///
    /// Only the first call does anything. Finding nothing is not an error.
    pub fn resolve<T>(&mut self, slot: &mut Option<Binding<T>>, scene: &Scene) -> Resolution
    where
        T: Send + Sync + 'static,
    {
        if self.ran {
            return Resolution::AlreadyRan;
        }
        self.ran = true;

        if slot.is_some() {
            return Resolution::Preset;
        }
        if !self.search_scene {
            return Resolution::NotFound;
        }

        match scene.find_first::<T>() {
            Some(binding) => {
                *slot = Some(binding);
                Resolution::Discovered
            }
            None => Resolution::NotFound,
        }
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Book;

    #[test]
    fn test_discovers_first_book() {
        let mut scene = Scene::new();
        let (_, book) = scene.spawn("book", Book::new());
        let mut slot: Option<Binding<Book>> = None;

        let mut resolver = ReferenceResolver::new();
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::Discovered);
        assert!(resolver.has_run());
        assert!(slot.is_some_and(|b| b.points_to(&book)));
    }

    #[test]
    fn test_preset_binding_is_kept() {
        let mut scene = Scene::new();
        let (_, in_scene) = scene.spawn("scene_book", Book::new());
        let injected = folio_core::shared(Book::opened_at(4));
        let mut slot = Some(Binding::new(&injected));

        let mut resolver = ReferenceResolver::new();
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::Preset);
        let bound = slot.expect("binding kept");
        assert!(bound.points_to(&injected));
        assert!(!bound.points_to(&in_scene));
    }

    #[test]
    fn test_not_found_leaves_slot_empty() {
        let scene = Scene::new();
        let mut slot: Option<Binding<Book>> = None;
        let mut resolver = ReferenceResolver::new();
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::NotFound);
        assert!(slot.is_none());
    }

    #[test]
    fn test_runs_at_most_once() {
        let mut scene = Scene::new();
        let mut slot: Option<Binding<Book>> = None;
        let mut resolver = ReferenceResolver::new();
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::NotFound);

        // A book showing up later is not picked up.
        let _book = scene.spawn("late_book", Book::new());
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::AlreadyRan);
        assert!(slot.is_none());
    }

    #[test]
    fn test_toggling_search_keeps_run_state() {
        let mut scene = Scene::new();
        let mut slot: Option<Binding<Book>> = None;
        let mut resolver = ReferenceResolver::injection_only();
        assert!(!resolver.searches_scene());
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::NotFound);

        let _book = scene.spawn("book", Book::new());
        resolver.set_search_scene(true);
        assert!(resolver.searches_scene());
        assert!(resolver.has_run());
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::AlreadyRan);
        assert!(slot.is_none());
    }

    #[test]
    fn test_injection_only_skips_scene() {
        let mut scene = Scene::new();
        let _book = scene.spawn("book", Book::new());
        let mut slot: Option<Binding<Book>> = None;
        let mut resolver = ReferenceResolver::injection_only();
        assert_eq!(resolver.resolve(&mut slot, &scene), Resolution::NotFound);
        assert!(slot.is_none());
    }
}
