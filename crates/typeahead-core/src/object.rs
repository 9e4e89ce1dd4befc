//! Object identity for Typeahead.
//!
//! This module provides the object system underpinning widgets: every widget
//! registers itself in a process-wide [`ObjectRegistry`] and is addressed by
//! an opaque [`ObjectId`]. The registry records the object's name and type so
//! focus management and diagnostics can refer to widgets without holding
//! references to them.
//!
//! # Key Types
//!
//! - [`Object`] - Base trait for types that participate in the object system
//! - [`ObjectBase`] - Helper field that handles registration
//! - [`ObjectId`] - Unique identifier for a registered object
//! - [`ObjectRegistry`] / [`SharedObjectRegistry`] - Object bookkeeping
//!
//! # Example
//!
//! ```
//! use typeahead_core::{Object, ObjectBase, ObjectId, init_global_registry};
//!
//! // Initialize the registry before creating objects
//! init_global_registry();
//!
//! struct MyWidget {
//!     base: ObjectBase,
//! }
//!
//! impl MyWidget {
//!     fn new() -> Self {
//!         Self {
//!             base: ObjectBase::new::<Self>(),
//!         }
//!     }
//! }
//!
//! impl Object for MyWidget {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let widget = MyWidget::new();
//! widget.base.set_name("search_box");
//! assert_eq!(widget.base.name(), "search_box");
//! ```

use std::any::{Any, TypeId};

use parking_lot::{Mutex, RwLock};
use slotmap::{new_key_type, SlotMap};

use crate::error::ObjectError;

new_key_type! {
    /// A unique identifier for a registered object.
    ///
    /// IDs are handed out by the [`ObjectRegistry`] and remain valid until the
    /// object is destroyed. They are cheap to copy and safe to store.
    pub struct ObjectId;
}

/// A specialized Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Per-object bookkeeping kept by the registry.
#[derive(Debug)]
struct ObjectEntry {
    /// User-assigned name (empty by default).
    name: String,
    /// The concrete Rust type of the object.
    type_id: TypeId,
    /// Human-readable type name for diagnostics.
    type_name: &'static str,
}

/// Tracks all live objects in the process.
///
/// The registry owns no objects; it records identity, name, and type for each
/// registered object so other systems (focus management, logging) can refer
/// to them by [`ObjectId`].
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectEntry>,
}

impl ObjectRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let id = self.objects.insert(ObjectEntry {
            name: String::new(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        });
        tracing::trace!(target: "typeahead_core::object", ?id, type_name = std::any::type_name::<T>(), "registered object");
        id
    }

    /// Destroy an object, invalidating its ID.
    #[tracing::instrument(skip(self), target = "typeahead_core::object", level = "trace")]
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        self.objects.remove(id).ok_or(ObjectError::NotFound)?;
        tracing::trace!(target: "typeahead_core::object", ?id, "destroyed object");
        Ok(())
    }

    /// Check if an object is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|entry| entry.name.as_str())
            .ok_or(ObjectError::NotFound)
    }

    /// Set the object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        let entry = self.objects.get_mut(id).ok_or(ObjectError::NotFound)?;
        entry.name = name;
        Ok(())
    }

    /// Get the type ID of an object.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.objects
            .get(id)
            .map(|entry| entry.type_id)
            .ok_or(ObjectError::NotFound)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|entry| entry.type_name)
            .ok_or(ObjectError::NotFound)
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

/// A thread-safe wrapper around [`ObjectRegistry`].
///
/// Provides concurrent read access with exclusive write access via `RwLock`.
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared object registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Destroy an object.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(|s| s.to_string())
    }

    /// Set the object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the type ID of an object.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        ObjectRegistry::type_id(&self.inner.read(), id)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global object registry (lazy initialized).
static GLOBAL_REGISTRY: Mutex<Option<SharedObjectRegistry>> = Mutex::new(None);

/// Initialize the global object registry.
///
/// Safe to call more than once; subsequent calls are no-ops. Host
/// applications call this once during startup, before creating any widgets.
pub fn init_global_registry() {
    let mut guard = GLOBAL_REGISTRY.lock();
    if guard.is_none() {
        *guard = Some(SharedObjectRegistry::new());
    }
}

/// Get a reference to the global object registry.
///
/// Returns an error if the registry hasn't been initialized.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    let guard = GLOBAL_REGISTRY.lock();
    match guard.as_ref() {
        // SAFETY: Once initialized, the registry is never replaced, moved, or
        // set back to None, and the static it lives in is never deallocated,
        // so extending the borrow to 'static is sound.
        Some(registry) => Ok(unsafe { &*(registry as *const SharedObjectRegistry) }),
        None => Err(ObjectError::RegistryNotInitialized),
    }
}

/// The base trait that all objects must implement.
///
/// Types implementing this trait participate in the object system: they are
/// registered under an [`ObjectId`] and can be referred to by identity from
/// systems like focus management. Signals are carried as ordinary fields; the
/// trait only requires identity.
pub trait Object: Any + Send + Sync {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing the [`Object`] trait.
///
/// Include this as a field in your object types to handle registration and
/// provide the object ID. On construction, it automatically registers the
/// object with the [`global_registry`].
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new ObjectBase, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's ID.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        base: ObjectBase,
    }

    impl Dummy {
        fn new() -> Self {
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for Dummy {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_register_and_destroy() {
        setup();
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<Dummy>();

        assert!(registry.contains(id));
        assert_eq!(registry.object_count(), 1);

        registry.destroy(id).unwrap();
        assert!(!registry.contains(id));
        assert_eq!(registry.destroy(id), Err(ObjectError::NotFound));
    }

    #[test]
    fn test_object_name() {
        setup();
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<Dummy>();

        assert_eq!(registry.object_name(id).unwrap(), "");
        registry.set_object_name(id, "widget".to_string()).unwrap();
        assert_eq!(registry.object_name(id).unwrap(), "widget");
    }

    #[test]
    fn test_type_info() {
        setup();
        let mut registry = ObjectRegistry::new();
        let id = registry.register::<Dummy>();

        assert_eq!(registry.type_id(id).unwrap(), TypeId::of::<Dummy>());
        assert!(registry.type_name(id).unwrap().contains("Dummy"));
    }

    #[test]
    fn test_object_base_registers_globally() {
        setup();
        let dummy = Dummy::new();
        let id = dummy.object_id();

        let registry = global_registry().unwrap();
        assert!(registry.contains(id));

        drop(dummy);
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_object_base_name_roundtrip() {
        setup();
        let dummy = Dummy::new();
        dummy.base.set_name("main_input");
        assert_eq!(dummy.base.name(), "main_input");
    }
}
