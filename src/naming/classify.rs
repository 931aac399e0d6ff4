//! Structural classification of type descriptors.
//!
//! Every descriptor falls into exactly one [`Category`]. The checks run in a fixed order:
//! by-reference wrapping first, then enum, then array, and only then the runtime type code.
//! A by-reference enum therefore classifies as `ByReference`, and its element as `Enum`.
//!
//! # Examples
//!
//! ```rust
//! use dotbind::{
//!     metadata::typesystem::{PrimitiveKind, TypeBuilder, TypeCode},
//!     naming::{classify, Category},
//! };
//!
//! let mode = TypeBuilder::enumeration("App", "Mode", TypeCode::Int32).build()?;
//! let mode_ref = TypeBuilder::by_ref(&mode).build()?;
//!
//! assert_eq!(classify(&mode_ref), Category::ByReference(&mode));
//! assert_eq!(classify(&mode), Category::Enum);
//! assert_eq!(
//!     classify(&*TypeBuilder::primitive(TypeCode::Int32).build()?),
//!     Category::Primitive(PrimitiveKind::Int32)
//! );
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::fmt;

use crate::metadata::typesystem::{PrimitiveKind, TypeCode, TypeDescriptor};

/// The closed set of structural shapes a type descriptor can have.
///
/// Wrapping categories borrow their element descriptor; classify it again to descend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Category<'a> {
    /// Managed by-reference (`ref`/`out`) to the element type
    ByReference(&'a TypeDescriptor),
    /// Single-dimensional array of the element type
    Array(&'a TypeDescriptor),
    /// Enumeration
    Enum,
    /// Scalar value type
    Primitive(PrimitiveKind),
    /// `System.String`
    String,
    /// `System.Decimal`
    Decimal,
    /// `System.Object` or `System.ValueType`
    RootObject,
    /// `System.Void`
    Void,
    /// Any other class, interface or struct
    NamedObject,
}

impl Category<'_> {
    /// Check if values of this category are boxed into `NSNumber` inside collections
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Category::Primitive(_) | Category::Enum)
    }
}

impl fmt::Display for Category<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::ByReference(element) => write!(f, "ByReference({})", classify(element)),
            Category::Array(element) => write!(f, "Array({})", classify(element)),
            Category::Enum => write!(f, "Enum"),
            Category::Primitive(kind) => write!(f, "Primitive({})", kind.system_name()),
            Category::String => write!(f, "String"),
            Category::Decimal => write!(f, "Decimal"),
            Category::RootObject => write!(f, "RootObject"),
            Category::Void => write!(f, "Void"),
            Category::NamedObject => write!(f, "NamedObject"),
        }
    }
}

/// Classify a type descriptor.
///
/// The precedence is fixed: by-reference, enum, array, then type code. `Object`-coded types
/// from the `System` namespace are split into [`Category::RootObject`] and
/// [`Category::Void`]; everything else becomes [`Category::NamedObject`].
#[must_use]
pub fn classify(ty: &TypeDescriptor) -> Category<'_> {
    if ty.is_by_ref() {
        if let Some(element) = ty.element() {
            return Category::ByReference(element);
        }
    }

    if ty.is_enum() {
        return Category::Enum;
    }

    if ty.is_array() {
        if let Some(element) = ty.element() {
            return Category::Array(element);
        }
    }

    match ty.type_code() {
        TypeCode::String => Category::String,
        TypeCode::Decimal => Category::Decimal,
        TypeCode::Object => match (ty.namespace(), ty.name()) {
            ("System", "Object" | "ValueType") => Category::RootObject,
            ("System", "Void") => Category::Void,
            _ => Category::NamedObject,
        },
        code => match code.primitive() {
            Some(kind) => Category::Primitive(kind),
            None => Category::NamedObject,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::typesystem::TypeBuilder;
    use strum::IntoEnumIterator;

    #[test]
    fn test_primitives() {
        for kind in PrimitiveKind::iter() {
            let ty = TypeBuilder::primitive(kind.type_code()).build().unwrap();
            assert_eq!(classify(&ty), Category::Primitive(kind));
        }
    }

    #[test]
    fn test_system_types() {
        let string = TypeBuilder::primitive(TypeCode::String).build().unwrap();
        let decimal = TypeBuilder::primitive(TypeCode::Decimal).build().unwrap();
        let object = TypeBuilder::object().build().unwrap();
        let value_type = TypeBuilder::value_type().build().unwrap();
        let void = TypeBuilder::void().build().unwrap();

        assert_eq!(classify(&string), Category::String);
        assert_eq!(classify(&decimal), Category::Decimal);
        assert_eq!(classify(&object), Category::RootObject);
        assert_eq!(classify(&value_type), Category::RootObject);
        assert_eq!(classify(&void), Category::Void);
    }

    #[test]
    fn test_named_objects() {
        let class = TypeBuilder::class("App", "Widget").build().unwrap();
        let iface = TypeBuilder::interface("App", "IWidget").build().unwrap();
        let strukt = TypeBuilder::structure("App", "Point").build().unwrap();
        // only the System namespace is special
        let fake_object = TypeBuilder::class("App", "Object").build().unwrap();

        assert_eq!(classify(&class), Category::NamedObject);
        assert_eq!(classify(&iface), Category::NamedObject);
        assert_eq!(classify(&strukt), Category::NamedObject);
        assert_eq!(classify(&fake_object), Category::NamedObject);
    }

    #[test]
    fn test_enum_before_type_code() {
        let mode = TypeBuilder::enumeration("App", "Mode", TypeCode::Int64)
            .build()
            .unwrap();
        assert_eq!(classify(&mode), Category::Enum);
        assert!(classify(&mode).is_numeric());
    }

    #[test]
    fn test_by_reference_precedence() {
        let mode = TypeBuilder::enumeration("App", "Mode", TypeCode::Int32)
            .build()
            .unwrap();
        let mode_ref = TypeBuilder::by_ref(&mode).build().unwrap();
        let modes = TypeBuilder::array_of(&mode).build().unwrap();
        let modes_ref = TypeBuilder::by_ref(&modes).build().unwrap();

        assert_eq!(classify(&mode_ref), Category::ByReference(&mode));
        assert_eq!(classify(&modes), Category::Array(&mode));
        assert_eq!(classify(&modes_ref), Category::ByReference(&modes));
        assert_eq!(classify(&modes_ref).to_string(), "ByReference(Array(Enum))");
    }

    #[test]
    fn test_display() {
        let int = TypeBuilder::primitive(TypeCode::Int32).build().unwrap();
        let ints = TypeBuilder::array_of(&int).build().unwrap();
        assert_eq!(classify(&ints).to_string(), "Array(Primitive(Int32))");
        assert_eq!(Category::NamedObject.to_string(), "NamedObject");
    }
}
