//! Read-only type descriptors for the binding generator.
//!
//! This module models the subset of a managed type that name resolution needs: names,
//! structural flags, the element type of arrays and by-reference types, the runtime
//! [`TypeCode`], and the attributes attached to the type. Descriptors are produced by a
//! metadata provider (normally through [`TypeBuilder`]) and are never mutated afterwards.
//!
//! # Key Components
//!
//! - [`TypeDescriptor`]: Structural description of a single type
//! - [`TypeBuilder`]: The only way to construct a consistent descriptor
//! - [`TypeRegistry`]: Session-wide store of descriptors and bound classes
//! - [`MetadataProvider`]: Read-only query interface implemented by the registry
//! - [`TypeCode`] / [`PrimitiveKind`]: Runtime type codes and scalar kinds
//!
//! # Examples
//!
//! ```rust
//! use dotbind::metadata::typesystem::{TypeBuilder, TypeCode};
//!
//! let widgets = TypeBuilder::class("App", "Widgets").build()?;
//! let inner = TypeBuilder::class("App", "Inner").nested_in(&widgets).build()?;
//! assert_eq!(inner.full_name(), "App.Widgets+Inner");
//!
//! let ints = TypeBuilder::array_of(&TypeBuilder::primitive(TypeCode::Int32).build()?).build()?;
//! assert!(ints.is_array());
//! # Ok::<(), dotbind::Error>(())
//! ```

mod builder;
mod primitives;
mod registry;

use std::{fmt, sync::Arc};

use bitflags::bitflags;

pub use builder::TypeBuilder;
pub use primitives::{PrimitiveKind, TypeCode};
pub use registry::{MetadataProvider, TypeRegistry};

use crate::metadata::customattributes::AttributeData;

/// Reference to a `TypeDescriptor`
pub type TypeDescriptorRc = Arc<TypeDescriptor>;
/// A list of `TypeDescriptor` references
pub type TypeDescriptorList = Vec<TypeDescriptorRc>;

bitflags! {
    /// Structural flags of a type descriptor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// Reference type (class, array, string, delegate)
        const CLASS = 0x01;
        /// Enumeration
        const ENUM = 0x02;
        /// Single-dimensional array, element type present
        const ARRAY = 0x04;
        /// Managed by-reference (`ref`/`out`), element type present
        const BY_REF = 0x08;
        /// Interface
        const INTERFACE = 0x10;
        /// Value type (struct, enum, primitive)
        const VALUE_TYPE = 0x20;
    }
}

/// Structural description of a type, as supplied by the metadata provider.
///
/// Fields are private so that a descriptor can only be created through [`TypeBuilder`],
/// which guarantees that the `ARRAY`/`BY_REF` flags and the element type agree.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    full_name: String,
    name: String,
    namespace: String,
    flags: TypeFlags,
    element: Option<TypeDescriptorRc>,
    type_code: TypeCode,
    attributes: Vec<AttributeData>,
}

impl TypeDescriptor {
    /// Fully-qualified name, nested types separated by `+` (e.g. `App.Widgets+Inner`)
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Simple name without namespace or declaring type
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace, can be empty
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Structural flags
    #[must_use]
    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Runtime type code
    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    /// The element type of an array or by-reference type
    #[must_use]
    pub fn element(&self) -> Option<&TypeDescriptorRc> {
        self.element.as_ref()
    }

    /// Attributes attached to this type, in declaration order
    #[must_use]
    pub fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }

    /// Returns all attached attributes of the given fully-qualified attribute type
    pub fn attributes_of<'a>(
        &'a self,
        attribute_type: &'a str,
    ) -> impl Iterator<Item = &'a AttributeData> + 'a {
        self.attributes
            .iter()
            .filter(move |attr| attr.attribute_type == attribute_type)
    }

    /// Check if this is a reference type
    #[must_use]
    pub fn is_class(&self) -> bool {
        self.flags.contains(TypeFlags::CLASS)
    }

    /// Check if this is an enumeration
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.flags.contains(TypeFlags::ENUM)
    }

    /// Check if this is an array
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.flags.contains(TypeFlags::ARRAY)
    }

    /// Check if this is a by-reference type
    #[must_use]
    pub fn is_by_ref(&self) -> bool {
        self.flags.contains(TypeFlags::BY_REF)
    }

    /// Check if this is an interface
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.flags.contains(TypeFlags::INTERFACE)
    }

    /// Check if this is a value type
    #[must_use]
    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TypeFlags::VALUE_TYPE)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::customattributes::AttributeValue;

    #[test]
    fn test_flag_accessors() {
        let iface = TypeBuilder::interface("App", "IShape").build().unwrap();
        assert!(iface.is_interface());
        assert!(!iface.is_class());
        assert!(!iface.is_value_type());
        assert_eq!(iface.type_code(), TypeCode::Object);

        let en = TypeBuilder::enumeration("App", "Color", TypeCode::Byte)
            .build()
            .unwrap();
        assert!(en.is_enum());
        assert!(en.is_value_type());
        assert_eq!(en.type_code(), TypeCode::Byte);
    }

    #[test]
    fn test_attributes_of_filters_by_type() {
        let ty = TypeBuilder::class("App", "Foo")
            .attribute(AttributeData::new("System.ObsoleteAttribute"))
            .attribute(
                AttributeData::new("Foundation.RegisterAttribute")
                    .arg("System.String", AttributeValue::String("Bar".into())),
            )
            .build()
            .unwrap();

        assert_eq!(ty.attributes().len(), 2);
        assert_eq!(ty.attributes_of("Foundation.RegisterAttribute").count(), 1);
        assert_eq!(ty.attributes_of("System.SerializableAttribute").count(), 0);
    }

    #[test]
    fn test_display_uses_full_name() {
        let ty = TypeBuilder::class("App.Widgets", "Button").build().unwrap();
        assert_eq!(ty.to_string(), "App.Widgets.Button");
    }
}
