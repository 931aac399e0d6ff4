//! Session-wide type registry.
//!
//! The [`TypeRegistry`] stores every [`TypeDescriptor`] a binding session knows about, and
//! tracks which of those classes are actually being bound. Parameter spelling depends on
//! the latter: a parameter whose type is a bound class is passed as an object pointer.
//!
//! # Thread Safety
//!
//! - Lock-free primary storage (`SkipMap`) keyed by fully-qualified name, which also gives a
//!   deterministic iteration order
//! - Concurrent secondary index and bound-class set (`DashMap` / `DashSet`)
//!
//! # Examples
//!
//! ```rust
//! use dotbind::metadata::typesystem::{MetadataProvider, TypeBuilder, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let widget = TypeBuilder::class("App", "Widget").build()?;
//!
//! registry.insert(&widget)?;
//! registry.register_class(&widget);
//!
//! assert!(registry.has_class(&widget));
//! assert!(registry.find_type("App.Widget").is_some());
//! # Ok::<(), dotbind::Error>(())
//! ```

use crossbeam_skiplist::SkipMap;
use dashmap::{DashMap, DashSet};

use crate::{
    metadata::typesystem::{TypeDescriptor, TypeDescriptorList, TypeDescriptorRc},
    Error::{TypeInsert, TypeNotFound},
    Result,
};

/// Read-only access to the type descriptors of the assemblies being bound.
///
/// Loading metadata is the caller's concern; the engine only queries already-built
/// descriptors through this interface.
pub trait MetadataProvider: Send + Sync {
    /// Look up a type by its fully-qualified name
    fn find_type(&self, full_name: &str) -> Option<TypeDescriptorRc>;

    /// All known types, in a stable order
    fn types(&self) -> TypeDescriptorList;
}

/// Central registry of type descriptors for one binding session
pub struct TypeRegistry {
    /// Primary storage, keyed by fully-qualified name
    types: SkipMap<String, TypeDescriptorRc>,
    /// Simple name to fully-qualified names
    types_by_name: DashMap<String, Vec<String>>,
    /// Fully-qualified names of the classes emitted by this session
    classes: DashSet<String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: SkipMap::new(),
            types_by_name: DashMap::new(),
            classes: DashSet::new(),
        }
    }

    /// Insert a type descriptor
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeInsert`] if a type with the same fully-qualified name
    /// has already been inserted.
    pub fn insert(&self, new_type: &TypeDescriptorRc) -> Result<()> {
        let full_name = new_type.full_name().to_string();
        if self.types.contains_key(&full_name) {
            return Err(TypeInsert(full_name));
        }

        self.types.insert(full_name.clone(), new_type.clone());
        self.types_by_name
            .entry(new_type.name().to_string())
            .or_default()
            .push(full_name);

        Ok(())
    }

    /// Look up a type by fully-qualified name
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeNotFound`] if no such type is registered.
    pub fn get_by_fullname(&self, full_name: &str) -> Result<TypeDescriptorRc> {
        self.types
            .get(full_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| TypeNotFound(full_name.to_string()))
    }

    /// All types sharing a simple name, ordered by fully-qualified name
    pub fn get_by_name(&self, name: &str) -> TypeDescriptorList {
        let Some(full_names) = self.types_by_name.get(name) else {
            return Vec::new();
        };

        let mut found: TypeDescriptorList = full_names
            .iter()
            .filter_map(|full_name| self.types.get(full_name).map(|e| e.value().clone()))
            .collect();
        found.sort_by(|a, b| a.full_name().cmp(b.full_name()));
        found
    }

    /// Mark a class as bound by the current session
    pub fn register_class(&self, class: &TypeDescriptor) {
        self.classes.insert(class.full_name().to_string());
    }

    /// Check if a type is a class bound by the current session
    #[must_use]
    pub fn has_class(&self, ty: &TypeDescriptor) -> bool {
        ty.is_class() && self.classes.contains(ty.full_name())
    }

    /// Number of bound classes
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of registered types
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for TypeRegistry {
    fn find_type(&self, full_name: &str) -> Option<TypeDescriptorRc> {
        self.types.get(full_name).map(|entry| entry.value().clone())
    }

    fn types(&self) -> TypeDescriptorList {
        self.types.iter().map(|entry| entry.value().clone()).collect()
    }
}
