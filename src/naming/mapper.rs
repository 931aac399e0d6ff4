//! Rendering classified types as strings in each vocabulary.
//!
//! The [`TypeNameMapper`] spells a [`TypeDescriptor`] either in Objective-C (the language of
//! the generated binding) or in Mono's method-signature syntax (used to look the managed
//! member up at run time). Each vocabulary is an exhaustive match over [`Category`]; shapes
//! a vocabulary genuinely cannot express, such as an array of `void` or a by-reference to a
//! by-reference, produce [`crate::Error::CoverageGap`] rather than a guessed spelling.
//!
//! # Objective-C spellings
//!
//! | Category | Spelling |
//! |----------|----------|
//! | `Primitive` | `bool`, `int`, `unsigned long long`, ... (`Char` is `unsigned short`) |
//! | `String` | `NSString *` |
//! | `Decimal` | `NSDecimalNumber *` |
//! | `RootObject` | `NSObject` |
//! | `Void` | `void` |
//! | `Enum`, `NamedObject` | resolved class name |
//! | `Array` | `NSArray<NSNumber *> *`, `NSData *`, `NSArray<NSString *> *`, ... |
//! | `ByReference` | element + `* _Nullable`, with `_Nonnull` on reference elements |
//!
//! # Examples
//!
//! ```rust
//! use dotbind::{
//!     metadata::{diagnostics::DiagnosticBuffer, typesystem::{TypeBuilder, TypeCode}},
//!     naming::{TypeNameMapper, Vocabulary},
//! };
//!
//! let mapper = TypeNameMapper::default();
//! let mut buffer = DiagnosticBuffer::new();
//!
//! let strings = TypeBuilder::array_of(&TypeBuilder::primitive(TypeCode::String).build()?).build()?;
//! assert_eq!(mapper.map(&strings, Vocabulary::ObjC, &mut buffer)?, "NSArray<NSString *> *");
//! assert_eq!(mapper.map(&strings, Vocabulary::Mono, &mut buffer)?, "string[]");
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::fmt;

use crate::{
    metadata::{
        diagnostics::DiagnosticBuffer,
        typesystem::{PrimitiveKind, TypeDescriptor},
    },
    naming::{
        classify::{classify, Category},
        classname::ClassNameResolver,
        config::NamingConfig,
    },
    Result,
};

/// The spelling tables a type can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Objective-C, the target of the generated binding
    ObjC,
    /// Mono method-signature syntax of the managed host runtime
    Mono,
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocabulary::ObjC => write!(f, "Objective-C"),
            Vocabulary::Mono => write!(f, "Mono"),
        }
    }
}

/// Renders type descriptors in either vocabulary
#[derive(Debug, Clone, Default)]
pub struct TypeNameMapper<'a> {
    class_names: ClassNameResolver<'a>,
}

impl<'a> TypeNameMapper<'a> {
    /// Create a mapper using the registration attribute configured in `config`
    #[must_use]
    pub fn new(config: &'a NamingConfig) -> Self {
        TypeNameMapper {
            class_names: ClassNameResolver::new(config),
        }
    }

    /// The class name resolver used for enums and named objects
    #[must_use]
    pub fn class_names(&self) -> &ClassNameResolver<'a> {
        &self.class_names
    }

    /// Spell `ty` in `vocabulary`.
    ///
    /// Class name resolution warnings are appended to `diagnostics`.
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if the vocabulary has no spelling for the shape
    /// of `ty`.
    pub fn map(
        &self,
        ty: &TypeDescriptor,
        vocabulary: Vocabulary,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        match vocabulary {
            Vocabulary::ObjC => self.objc_name(ty, diagnostics),
            Vocabulary::Mono => mono_name(ty),
        }
    }

    /// Spell `ty` in Objective-C
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] for by-references to `void` or to another
    /// by-reference, and for arrays Objective-C collections can not hold.
    pub fn objc_name(
        &self,
        ty: &TypeDescriptor,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        Ok(match classify(ty) {
            Category::ByReference(element) => self.objc_by_ref_name(ty, element, diagnostics)?,
            Category::Array(element) => self.objc_array_name(ty, element, diagnostics)?,
            Category::Enum | Category::NamedObject => self.class_names.resolve(ty, diagnostics),
            Category::Primitive(kind) => objc_primitive(kind).to_string(),
            Category::String => "NSString *".to_string(),
            Category::Decimal => "NSDecimalNumber *".to_string(),
            Category::RootObject => "NSObject".to_string(),
            Category::Void => "void".to_string(),
        })
    }

    fn objc_by_ref_name(
        &self,
        ty: &TypeDescriptor,
        element: &TypeDescriptor,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        let category = classify(element);
        if matches!(category, Category::ByReference(_) | Category::Void) {
            return Err(coverage_gap!(ty, Vocabulary::ObjC));
        }

        let inner = self.objc_name(element, diagnostics)?;
        Ok(match category {
            // NSDecimalNumber is a boxed reference, not a value
            Category::Decimal | Category::String | Category::Array(_) => {
                format!("{inner} _Nonnull * _Nullable")
            }
            Category::Primitive(_) | Category::Enum => format!("{inner} * _Nullable"),
            Category::NamedObject if element.is_value_type() => format!("{inner} * _Nullable"),
            Category::NamedObject if element.is_interface() => {
                format!("id<{inner}> _Nonnull * _Nullable")
            }
            Category::NamedObject | Category::RootObject => {
                format!("{inner} * _Nonnull * _Nullable")
            }
            Category::ByReference(_) | Category::Void => {
                return Err(coverage_gap!(ty, Vocabulary::ObjC))
            }
        })
    }

    fn objc_array_name(
        &self,
        ty: &TypeDescriptor,
        element: &TypeDescriptor,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        Ok(match classify(element) {
            Category::Primitive(PrimitiveKind::Byte) => "NSData *".to_string(),
            Category::Primitive(_) | Category::Enum => "NSArray<NSNumber *> *".to_string(),
            Category::String => "NSArray<NSString *> *".to_string(),
            Category::Decimal => "NSArray<NSDecimalNumber *> *".to_string(),
            Category::RootObject => "NSArray<NSObject *> *".to_string(),
            Category::NamedObject if element.is_interface() => format!(
                "NSArray<id<{}>> *",
                self.class_names.resolve(element, diagnostics)
            ),
            Category::NamedObject if element.is_value_type() => {
                return Err(coverage_gap!(ty, Vocabulary::ObjC))
            }
            Category::NamedObject => format!(
                "NSArray<{} *> *",
                self.class_names.resolve(element, diagnostics)
            ),
            Category::Void | Category::Array(_) | Category::ByReference(_) => {
                return Err(coverage_gap!(ty, Vocabulary::ObjC))
            }
        })
    }
}

pub(crate) fn objc_primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "bool",
        PrimitiveKind::Char => "unsigned short",
        PrimitiveKind::SByte => "signed char",
        PrimitiveKind::Byte => "unsigned char",
        PrimitiveKind::Int16 => "short",
        PrimitiveKind::UInt16 => "unsigned short",
        PrimitiveKind::Int32 => "int",
        PrimitiveKind::UInt32 => "unsigned int",
        PrimitiveKind::Int64 => "long long",
        PrimitiveKind::UInt64 => "unsigned long long",
        PrimitiveKind::Single => "float",
        PrimitiveKind::Double => "double",
    }
}

fn mono_primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "bool",
        PrimitiveKind::Char => "char",
        PrimitiveKind::SByte => "sbyte",
        PrimitiveKind::Byte => "byte",
        PrimitiveKind::Int16 => "int16",
        PrimitiveKind::UInt16 => "uint16",
        PrimitiveKind::Int32 => "int",
        PrimitiveKind::UInt32 => "uint",
        PrimitiveKind::Int64 => "long",
        PrimitiveKind::UInt64 => "ulong",
        PrimitiveKind::Single => "single",
        PrimitiveKind::Double => "double",
    }
}

/// Spell `ty` in Mono method-signature syntax.
///
/// Reference classes collapse to `object`; interfaces, structs and enums keep their
/// fully-qualified name.
///
/// # Errors
/// Returns [`crate::Error::CoverageGap`] for by-references to `void` or to another
/// by-reference, and for arrays of `void` or of by-references.
pub fn mono_name(ty: &TypeDescriptor) -> Result<String> {
    Ok(match classify(ty) {
        Category::ByReference(element) => match classify(element) {
            Category::ByReference(_) | Category::Void => {
                return Err(coverage_gap!(ty, Vocabulary::Mono))
            }
            _ => format!("{}&", mono_name(element)?),
        },
        Category::Array(element) => match classify(element) {
            Category::ByReference(_) | Category::Void => {
                return Err(coverage_gap!(ty, Vocabulary::Mono))
            }
            _ => format!("{}[]", mono_name(element)?),
        },
        Category::Enum => ty.full_name().to_string(),
        Category::Primitive(kind) => mono_primitive(kind).to_string(),
        Category::String => "string".to_string(),
        Category::Decimal => "System.Decimal".to_string(),
        Category::RootObject => "object".to_string(),
        Category::Void => "void".to_string(),
        Category::NamedObject if ty.is_class() => "object".to_string(),
        Category::NamedObject => ty.full_name().to_string(),
    })
}
