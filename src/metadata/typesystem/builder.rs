//! Builder for type descriptors.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for constructing
//! [`TypeDescriptor`] values: primitives, the `System` root types, classes, value types,
//! interfaces, enums, arrays and by-reference types. Every constructor fixes the structural
//! flags and type code together, so a descriptor built here is always consistent with the
//! classification rules of [`crate::naming::classify`].
//!
//! # Example
//!
//! ```rust
//! use dotbind::metadata::typesystem::{TypeBuilder, TypeCode};
//!
//! let int = TypeBuilder::primitive(TypeCode::Int32).build()?;
//! let int_ref = TypeBuilder::by_ref(&int).build()?;
//!
//! assert_eq!(int_ref.full_name(), "System.Int32&");
//! assert_eq!(int_ref.element().map(|e| e.name()), Some("Int32"));
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::sync::Arc;

use crate::{
    metadata::{
        customattributes::AttributeData,
        typesystem::{TypeCode, TypeDescriptor, TypeDescriptorRc, TypeFlags},
    },
    Result,
};

/// Provides a fluent API for building type descriptors
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    namespace: String,
    name: String,
    flags: TypeFlags,
    type_code: TypeCode,
    element: Option<TypeDescriptorRc>,
    declaring_type: Option<String>,
    attributes: Vec<AttributeData>,
}

impl TypeBuilder {
    fn named(namespace: &str, name: &str, flags: TypeFlags, type_code: TypeCode) -> Self {
        TypeBuilder {
            namespace: namespace.to_string(),
            name: name.to_string(),
            flags,
            type_code,
            element: None,
            declaring_type: None,
            attributes: Vec::new(),
        }
    }

    fn wrapping(element: &TypeDescriptorRc, suffix: &str, flags: TypeFlags) -> Self {
        TypeBuilder {
            namespace: element.namespace().to_string(),
            name: format!("{}{}", element.name(), suffix),
            flags,
            type_code: TypeCode::Object,
            element: Some(element.clone()),
            declaring_type: None,
            attributes: Vec::new(),
        }
    }

    /// Start building one of the built-in `System` types for a type code
    ///
    /// `String` is built as a class, every other code as a value type.
    ///
    /// ## Arguments
    /// * 'type_code' - The runtime type code, [`TypeCode::Object`] builds `System.Object`
    #[must_use]
    pub fn primitive(type_code: TypeCode) -> Self {
        match type_code {
            TypeCode::Object => Self::object(),
            TypeCode::String => Self::named("System", "String", TypeFlags::CLASS, type_code),
            _ => Self::named(
                "System",
                type_code.system_name(),
                TypeFlags::VALUE_TYPE,
                type_code,
            ),
        }
    }

    /// Start building `System.Object`
    #[must_use]
    pub fn object() -> Self {
        Self::named("System", "Object", TypeFlags::CLASS, TypeCode::Object)
    }

    /// Start building `System.ValueType`
    #[must_use]
    pub fn value_type() -> Self {
        Self::named("System", "ValueType", TypeFlags::CLASS, TypeCode::Object)
    }

    /// Start building `System.Void`
    #[must_use]
    pub fn void() -> Self {
        Self::named("System", "Void", TypeFlags::VALUE_TYPE, TypeCode::Object)
    }

    /// Start building a class with the given name
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a class type
    /// * 'name'      - Name for a class type
    #[must_use]
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::named(namespace, name, TypeFlags::CLASS, TypeCode::Object)
    }

    /// Start building an interface with the given name
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a interface type
    /// * 'name'      - Name for a interface type
    #[must_use]
    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::named(namespace, name, TypeFlags::INTERFACE, TypeCode::Object)
    }

    /// Start building a user-defined value type (struct)
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a value type
    /// * 'name'      - Name for a value type
    #[must_use]
    pub fn structure(namespace: &str, name: &str) -> Self {
        Self::named(namespace, name, TypeFlags::VALUE_TYPE, TypeCode::Object)
    }

    /// Start building an enum
    ///
    /// ## Arguments
    /// * 'namespace'  - Namespace for the enum
    /// * 'name'       - Name for the enum
    /// * 'underlying' - Type code of the underlying integer type, reported as the enum's own
    #[must_use]
    pub fn enumeration(namespace: &str, name: &str, underlying: TypeCode) -> Self {
        Self::named(
            namespace,
            name,
            TypeFlags::ENUM | TypeFlags::VALUE_TYPE,
            underlying,
        )
    }

    /// Start building a single-dimensional array of `element`
    #[must_use]
    pub fn array_of(element: &TypeDescriptorRc) -> Self {
        Self::wrapping(element, "[]", TypeFlags::ARRAY | TypeFlags::CLASS)
    }

    /// Start building a by-reference type pointing at `element`
    #[must_use]
    pub fn by_ref(element: &TypeDescriptorRc) -> Self {
        Self::wrapping(element, "&", TypeFlags::BY_REF)
    }

    /// Declare the type as nested inside `outer`
    ///
    /// The namespace given to the constructor is replaced by the one of `outer`.
    #[must_use]
    pub fn nested_in(mut self, outer: &TypeDescriptor) -> Self {
        self.namespace = outer.namespace().to_string();
        self.declaring_type = Some(outer.full_name().to_string());
        self
    }

    /// Attach an attribute; attributes keep the order in which they are added
    #[must_use]
    pub fn attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Finish the descriptor
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the name is empty, if an array or by-reference
    /// type is declared as nested, or if an enum is backed by a non-integer type code.
    pub fn build(self) -> Result<TypeDescriptorRc> {
        if self.name.is_empty() {
            return Err(malformed_error!("Type name must not be empty"));
        }

        if self.element.is_some() && self.declaring_type.is_some() {
            return Err(malformed_error!(
                "Array or by-reference type '{}' can not be nested",
                self.name
            ));
        }

        if self.flags.contains(TypeFlags::ENUM)
            && !self.type_code.primitive().is_some_and(|kind| kind.is_integer())
        {
            return Err(malformed_error!(
                "Enum '{}' has non-integer underlying type {}",
                self.name,
                self.type_code
            ));
        }

        let full_name = match (&self.declaring_type, &self.element) {
            (Some(outer), _) => format!("{}+{}", outer, self.name),
            (None, Some(element)) => {
                format!("{}{}", element.full_name(), &self.name[element.name().len()..])
            }
            (None, None) if self.namespace.is_empty() => self.name.clone(),
            (None, None) => format!("{}.{}", self.namespace, self.name),
        };

        Ok(Arc::new(TypeDescriptor {
            full_name,
            name: self.name,
            namespace: self.namespace,
            flags: self.flags,
            element: self.element,
            type_code: self.type_code,
            attributes: self.attributes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_builders() {
        let int = TypeBuilder::primitive(TypeCode::Int32).build().unwrap();
        assert_eq!(int.full_name(), "System.Int32");
        assert!(int.is_value_type());

        let string = TypeBuilder::primitive(TypeCode::String).build().unwrap();
        assert_eq!(string.full_name(), "System.String");
        assert!(string.is_class());

        let object = TypeBuilder::primitive(TypeCode::Object).build().unwrap();
        assert_eq!(object.full_name(), "System.Object");
    }

    #[test]
    fn test_nested_full_name() {
        let widgets = TypeBuilder::class("App", "Widgets").build().unwrap();
        let inner = TypeBuilder::class("Ignored", "Inner")
            .nested_in(&widgets)
            .build()
            .unwrap();
        let deeper = TypeBuilder::structure("", "Deeper")
            .nested_in(&inner)
            .build()
            .unwrap();

        assert_eq!(inner.full_name(), "App.Widgets+Inner");
        assert_eq!(inner.namespace(), "App");
        assert_eq!(deeper.full_name(), "App.Widgets+Inner+Deeper");
    }

    #[test]
    fn test_wrapped_types() {
        let widgets = TypeBuilder::class("App", "Widgets").build().unwrap();
        let inner = TypeBuilder::class("App", "Inner")
            .nested_in(&widgets)
            .build()
            .unwrap();
        let array = TypeBuilder::array_of(&inner).build().unwrap();
        let array_ref = TypeBuilder::by_ref(&array).build().unwrap();

        assert_eq!(array.name(), "Inner[]");
        assert_eq!(array.full_name(), "App.Widgets+Inner[]");
        assert!(array.is_array() && array.is_class());
        assert_eq!(array_ref.full_name(), "App.Widgets+Inner[]&");
        assert!(array_ref.is_by_ref());
        assert_eq!(array_ref.element().unwrap().full_name(), array.full_name());
    }

    #[test]
    fn test_global_namespace() {
        let ty = TypeBuilder::class("", "Globals").build().unwrap();
        assert_eq!(ty.full_name(), "Globals");
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            TypeBuilder::class("App", "").build(),
            Err(crate::Error::Malformed { .. })
        ));
        assert!(matches!(
            TypeBuilder::enumeration("App", "Bad", TypeCode::Double).build(),
            Err(crate::Error::Malformed { .. })
        ));

        let outer = TypeBuilder::class("App", "Outer").build().unwrap();
        let int = TypeBuilder::primitive(TypeCode::Int32).build().unwrap();
        assert!(TypeBuilder::array_of(&int).nested_in(&outer).build().is_err());
    }
}
