//! # Scene Registry
//!
//! The ambient environment components discover collaborators in. The scene
//! holds the owning handle of every object spawned into it; lookups hand out
//! [`Binding`]s only.
//!
//! Discovery is a fallback. Prefer passing bindings in at construction.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::handle::{shared, Binding, Shared};

/// Identifier of an object in a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Returns the raw ID value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct SceneObject {
    id: ObjectId,
    name: String,
    type_name: &'static str,
    handle: Arc<dyn Any + Send + Sync>,
}

/// Registry of live host objects, in spawn order.
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `value` into the scene and returns its ID and owning handle.
    pub fn spawn<T>(&mut self, name: impl Into<String>, value: T) -> (ObjectId, Shared<T>)
    where
        T: Send + Sync + 'static,
    {
        let handle = shared(value);
        let id = self.insert(name, Arc::clone(&handle));
        (id, handle)
    }

    /// Registers an existing handle with the scene.
    pub fn insert<T>(&mut self, name: impl Into<String>, handle: Shared<T>) -> ObjectId
    where
        T: Send + Sync + 'static,
    {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(SceneObject {
            id,
            name: name.into(),
            type_name: type_name::<T>(),
            handle,
        });
        id
    }

    /// Removes an object, dropping the scene's handle to it.
    ///
    /// Returns false if the ID is unknown.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        self.objects.remove(index);
        true
    }

    /// Finds the first object of type `T`, in spawn order.
    #[must_use]
    pub fn find_first<T>(&self) -> Option<Binding<T>>
    where
        T: Send + Sync + 'static,
    {
        self.objects.iter().find_map(|object| {
            Arc::clone(&object.handle)
                .downcast::<RwLock<T>>()
                .ok()
                .map(|handle| Binding::new(&handle))
        })
    }

    /// Returns the name of an object.
    #[must_use]
    pub fn name_of(&self, id: ObjectId) -> Option<&str> {
        self.objects
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.as_str())
    }

    /// Number of objects in the scene.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene holds no objects.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.objects
                    .iter()
                    .map(|o| (o.id.raw(), o.name.as_str(), o.type_name)),
            )
            .finish()
    }
}
