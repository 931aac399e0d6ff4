use std::fmt;

use strum::{EnumCount, EnumIter};

/// The closed set of runtime type codes a type descriptor can carry.
///
/// Mirrors `System.TypeCode` for the codes that occur in bindable signatures. As in the
/// runtime, an enum reports the type code of its underlying integer type, and every
/// non-primitive type (classes, interfaces, structs, arrays, by-reference types) reports
/// [`TypeCode::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum TypeCode {
    /// System.Boolean
    Boolean,
    /// System.Char
    Char,
    /// System.SByte
    SByte,
    /// System.Byte
    Byte,
    /// System.Int16
    Int16,
    /// System.UInt16
    UInt16,
    /// System.Int32
    Int32,
    /// System.UInt32
    UInt32,
    /// System.Int64
    Int64,
    /// System.UInt64
    UInt64,
    /// System.Single
    Single,
    /// System.Double
    Double,
    /// System.Decimal
    Decimal,
    /// System.String
    String,
    /// Any other type
    Object,
}

impl TypeCode {
    /// Returns the scalar kind for this type code, if it has one.
    ///
    /// `Decimal`, `String` and `Object` are not scalars and return `None`.
    #[must_use]
    pub fn primitive(self) -> Option<PrimitiveKind> {
        match self {
            TypeCode::Boolean => Some(PrimitiveKind::Boolean),
            TypeCode::Char => Some(PrimitiveKind::Char),
            TypeCode::SByte => Some(PrimitiveKind::SByte),
            TypeCode::Byte => Some(PrimitiveKind::Byte),
            TypeCode::Int16 => Some(PrimitiveKind::Int16),
            TypeCode::UInt16 => Some(PrimitiveKind::UInt16),
            TypeCode::Int32 => Some(PrimitiveKind::Int32),
            TypeCode::UInt32 => Some(PrimitiveKind::UInt32),
            TypeCode::Int64 => Some(PrimitiveKind::Int64),
            TypeCode::UInt64 => Some(PrimitiveKind::UInt64),
            TypeCode::Single => Some(PrimitiveKind::Single),
            TypeCode::Double => Some(PrimitiveKind::Double),
            TypeCode::Decimal | TypeCode::String | TypeCode::Object => None,
        }
    }

    /// The simple name of the `System` type this code stands for.
    #[must_use]
    pub fn system_name(self) -> &'static str {
        match self.primitive() {
            Some(kind) => kind.system_name(),
            None => match self {
                TypeCode::Decimal => "Decimal",
                TypeCode::String => "String",
                _ => "Object",
            },
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.system_name())
    }
}

/// Scalar value types with a fixed one-to-one spelling in every vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrimitiveKind {
    /// true/false value
    Boolean,
    /// UTF-16 code unit
    Char,
    /// signed 8-bit integer
    SByte,
    /// unsigned 8-bit integer
    Byte,
    /// signed 16-bit integer
    Int16,
    /// unsigned 16-bit integer
    UInt16,
    /// signed 32-bit integer
    Int32,
    /// unsigned 32-bit integer
    UInt32,
    /// signed 64-bit integer
    Int64,
    /// unsigned 64-bit integer
    UInt64,
    /// 32-bit floating point
    Single,
    /// 64-bit floating point
    Double,
}

impl PrimitiveKind {
    /// The simple name of the `System` type, e.g. `Int32`
    #[must_use]
    pub fn system_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::SByte => "SByte",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::Double => "Double",
        }
    }

    /// The matching [`TypeCode`]
    #[must_use]
    pub fn type_code(self) -> TypeCode {
        match self {
            PrimitiveKind::Boolean => TypeCode::Boolean,
            PrimitiveKind::Char => TypeCode::Char,
            PrimitiveKind::SByte => TypeCode::SByte,
            PrimitiveKind::Byte => TypeCode::Byte,
            PrimitiveKind::Int16 => TypeCode::Int16,
            PrimitiveKind::UInt16 => TypeCode::UInt16,
            PrimitiveKind::Int32 => TypeCode::Int32,
            PrimitiveKind::UInt32 => TypeCode::UInt32,
            PrimitiveKind::Int64 => TypeCode::Int64,
            PrimitiveKind::UInt64 => TypeCode::UInt64,
            PrimitiveKind::Single => TypeCode::Single,
            PrimitiveKind::Double => TypeCode::Double,
        }
    }

    /// Check if this kind is an integer type that can back an enum
    #[must_use]
    pub fn is_integer(self) -> bool {
        !matches!(
            self,
            PrimitiveKind::Boolean
                | PrimitiveKind::Char
                | PrimitiveKind::Single
                | PrimitiveKind::Double
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_primitive_roundtrip_through_type_code() {
        for kind in PrimitiveKind::iter() {
            assert_eq!(kind.type_code().primitive(), Some(kind));
        }
    }

    #[test]
    fn test_non_scalar_codes() {
        assert_eq!(TypeCode::Decimal.primitive(), None);
        assert_eq!(TypeCode::String.primitive(), None);
        assert_eq!(TypeCode::Object.primitive(), None);
        assert_eq!(
            TypeCode::iter().filter(|c| c.primitive().is_some()).count(),
            PrimitiveKind::COUNT
        );
    }

    #[test]
    fn test_system_names() {
        assert_eq!(TypeCode::Int32.system_name(), "Int32");
        assert_eq!(TypeCode::Decimal.to_string(), "Decimal");
        assert_eq!(TypeCode::String.system_name(), "String");
        assert!(PrimitiveKind::UInt64.is_integer());
        assert!(!PrimitiveKind::Double.is_integer());
    }
}
