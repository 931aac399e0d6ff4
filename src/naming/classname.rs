//! Objective-C class name resolution.
//!
//! A managed type is exported under the name given by its registration attribute
//! (`[Register ("Name")]` or `[Register (Name = "Name")]`), or, if there is none, under its
//! fully-qualified name with `.` and `+` replaced by `_`.
//!
//! Attribute problems never abort resolution. Each one is recorded as a warning in the
//! caller's [`DiagnosticBuffer`] and the resolver carries on with what it has:
//!
//! | Code | Condition |
//! |------|-----------|
//! | W1 | the name argument is not string-typed |
//! | W2 | the constructor has neither one nor two arguments |
//! | W3 | constructor name and `Name` property differ (the property wins) |
//! | W4 | `SkipRegistration` is set |
//! | W5 | an unknown named property is set |
//! | W6 | no usable name remains, the default convention is used |
//! | W7 | more than one registration attribute is attached |
//!
//! # Examples
//!
//! ```rust
//! use dotbind::{
//!     metadata::{
//!         customattributes::{AttributeData, AttributeValue},
//!         diagnostics::{DiagnosticBuffer, DiagnosticCode},
//!         typesystem::TypeBuilder,
//!     },
//!     naming::ClassNameResolver,
//! };
//!
//! let foo = TypeBuilder::class("App", "Foo")
//!     .attribute(
//!         AttributeData::new("Foundation.RegisterAttribute")
//!             .arg("System.String", AttributeValue::String("Bar".into()))
//!             .named("Name", AttributeValue::String("Foo".into())),
//!     )
//!     .build()?;
//!
//! let mut buffer = DiagnosticBuffer::new();
//! let name = ClassNameResolver::default().resolve(&foo, &mut buffer);
//!
//! assert_eq!(name, "Foo");
//! assert_eq!(buffer.iter().next().map(|d| d.code), Some(DiagnosticCode::ConflictingName));
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::borrow::Cow;

use crate::{
    metadata::{
        customattributes::{AttributeData, STRING_TYPE},
        diagnostics::{DiagnosticBuffer, DiagnosticCategory, DiagnosticCode},
        typesystem::TypeDescriptor,
    },
    naming::config::{NamingConfig, REGISTER_ATTRIBUTE},
};

/// The default Objective-C name for a type: its full name with `.` and `+` replaced by `_`
#[must_use]
pub fn default_class_name(ty: &TypeDescriptor) -> String {
    ty.full_name().replace(['.', '+'], "_")
}

/// Resolves the externally visible class name of a type from its registration attribute
#[derive(Debug, Clone)]
pub struct ClassNameResolver<'a> {
    registration_attribute: Cow<'a, str>,
}

impl Default for ClassNameResolver<'_> {
    fn default() -> Self {
        ClassNameResolver {
            registration_attribute: Cow::Borrowed(REGISTER_ATTRIBUTE),
        }
    }
}

impl<'a> ClassNameResolver<'a> {
    /// Create a resolver using the registration attribute configured in `config`
    #[must_use]
    pub fn new(config: &'a NamingConfig) -> Self {
        ClassNameResolver {
            registration_attribute: Cow::Borrowed(&config.registration_attribute),
        }
    }

    /// The fully-qualified registration attribute type this resolver looks for
    #[must_use]
    pub fn registration_attribute(&self) -> &str {
        &self.registration_attribute
    }

    /// Resolve the class name of `ty`, appending warnings to `diagnostics`.
    ///
    /// Always returns a usable identifier. Identical descriptors produce identical names and
    /// identical warning sequences.
    pub fn resolve(&self, ty: &TypeDescriptor, diagnostics: &mut DiagnosticBuffer) -> String {
        let fallback = default_class_name(ty);

        let mut registrations = ty.attributes_of(&self.registration_attribute);
        let Some(register) = registrations.next() else {
            return fallback;
        };

        let duplicates = registrations.count();
        if duplicates > 0 {
            warn(
                diagnostics,
                ty,
                DiagnosticCode::DuplicateRegistration,
                format!(
                    "Type '{}' has {} '{}' attributes, only the first one is used",
                    ty.full_name(),
                    duplicates + 1,
                    self.registration_attribute
                ),
            );
        }

        match self.explicit_name(ty, register, diagnostics) {
            Some(name) if !name.trim().is_empty() => {
                log::trace!("resolved class name of '{}' to '{}'", ty.full_name(), name);
                name
            }
            _ => {
                warn(
                    diagnostics,
                    ty,
                    DiagnosticCode::MissingName,
                    format!(
                        "The '{}' attribute on type '{}' does not provide a usable name, \
                         using the default name '{}'",
                        self.registration_attribute,
                        ty.full_name(),
                        fallback
                    ),
                );
                log::debug!(
                    "falling back to default class name '{}' for '{}'",
                    fallback,
                    ty.full_name()
                );
                fallback
            }
        }
    }

    fn explicit_name(
        &self,
        ty: &TypeDescriptor,
        register: &AttributeData,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Option<String> {
        let mut candidate = match register.fixed_args.as_slice() {
            [first] | [first, _] => {
                if first.is_string_typed() {
                    first.value.as_str().map(str::to_string)
                } else {
                    warn(
                        diagnostics,
                        ty,
                        DiagnosticCode::InvalidArgumentType,
                        format!(
                            "The first argument of the '{}' attribute on type '{}' has type \
                             '{}', expected '{}'",
                            self.registration_attribute,
                            ty.full_name(),
                            first.arg_type,
                            STRING_TYPE
                        ),
                    );
                    None
                }
            }
            args => {
                warn(
                    diagnostics,
                    ty,
                    DiagnosticCode::UnexpectedArity,
                    format!(
                        "The '{}' attribute on type '{}' has {} constructor argument(s), \
                         expected 1 or 2",
                        self.registration_attribute,
                        ty.full_name(),
                        args.len()
                    ),
                );
                None
            }
        };

        for named in register.named_args.iter().filter(|arg| !arg.is_field) {
            match named.name.as_str() {
                "IsWrapper" => {}
                "Name" => {
                    let Some(value) = named.value.as_str() else {
                        warn(
                            diagnostics,
                            ty,
                            DiagnosticCode::InvalidArgumentType,
                            format!(
                                "The Name property of the '{}' attribute on type '{}' has \
                                 value {}, expected a string",
                                self.registration_attribute,
                                ty.full_name(),
                                named.value
                            ),
                        );
                        continue;
                    };

                    match &candidate {
                        Some(previous) if previous != value => {
                            warn(
                                diagnostics,
                                ty,
                                DiagnosticCode::ConflictingName,
                                format!(
                                    "The '{}' attribute on type '{}' specifies conflicting \
                                     names: '{}' is discarded in favor of the Name property \
                                     '{}'",
                                    self.registration_attribute,
                                    ty.full_name(),
                                    previous,
                                    value
                                ),
                            );
                            candidate = Some(value.to_string());
                        }
                        Some(_) => {}
                        None => candidate = Some(value.to_string()),
                    }
                }
                "SkipRegistration" => warn(
                    diagnostics,
                    ty,
                    DiagnosticCode::UnsupportedOption,
                    format!(
                        "SkipRegistration = {} on the '{}' attribute of type '{}' is not \
                         supported and is ignored",
                        named.value,
                        self.registration_attribute,
                        ty.full_name()
                    ),
                ),
                other => warn(
                    diagnostics,
                    ty,
                    DiagnosticCode::UnsupportedNamedArgument,
                    format!(
                        "Named argument '{}' = {} on the '{}' attribute of type '{}' is not \
                         supported and is ignored",
                        other,
                        named.value,
                        self.registration_attribute,
                        ty.full_name()
                    ),
                ),
            }
        }

        candidate
    }
}

fn warn(
    diagnostics: &mut DiagnosticBuffer,
    ty: &TypeDescriptor,
    code: DiagnosticCode,
    message: String,
) {
    diagnostics.warning(
        code,
        DiagnosticCategory::CustomAttribute,
        ty.full_name(),
        message,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            customattributes::AttributeValue,
            typesystem::{TypeBuilder, TypeDescriptorRc},
        },
        test::{register, register_with, string_arg},
    };

    fn resolve(ty: &TypeDescriptor) -> (String, Vec<DiagnosticCode>) {
        let mut buffer = DiagnosticBuffer::new();
        let name = ClassNameResolver::default().resolve(ty, &mut buffer);
        (name, buffer.iter().map(|d| d.code).collect())
    }

    fn registered(attr: AttributeData) -> TypeDescriptorRc {
        TypeBuilder::class("App", "Foo")
            .attribute(attr)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_name() {
        let widgets = TypeBuilder::class("App", "Widgets").build().unwrap();
        let inner = TypeBuilder::class("App", "Inner")
            .nested_in(&widgets)
            .build()
            .unwrap();

        assert_eq!(resolve(&inner), ("App_Widgets_Inner".to_string(), vec![]));
    }

    #[test]
    fn test_unrelated_attributes_are_ignored() {
        let ty = TypeBuilder::class("App", "Foo")
            .attribute(AttributeData::new("System.SerializableAttribute"))
            .build()
            .unwrap();

        assert_eq!(resolve(&ty), ("App_Foo".to_string(), vec![]));
    }

    #[test]
    fn test_positional_name() {
        assert_eq!(
            resolve(&registered(register("Bar"))),
            ("Bar".to_string(), vec![])
        );

        let two_args = register("Bar").arg("System.Boolean", AttributeValue::Bool(true));
        assert_eq!(resolve(&registered(two_args)), ("Bar".to_string(), vec![]));
    }

    #[test]
    fn test_named_name() {
        let attr = register_with(&[]).named("Name", string_arg("Foo"));
        // no constructor arguments is an arity warning, but Name still applies
        assert_eq!(
            resolve(&registered(attr)),
            ("Foo".to_string(), vec![DiagnosticCode::UnexpectedArity])
        );
    }

    #[test]
    fn test_named_beats_positional() {
        let mut buffer = DiagnosticBuffer::new();
        let ty = registered(register("Bar").named("Name", string_arg("Foo")));
        let name = ClassNameResolver::default().resolve(&ty, &mut buffer);

        assert_eq!(name, "Foo");
        let diags: Vec<_> = buffer.iter().collect();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, DiagnosticCode::ConflictingName);
        assert!(diags[0].message.contains("'Bar'"));
        assert!(diags[0].message.contains("'Foo'"));
        assert!(diags[0].message.contains("App.Foo"));
    }

    #[test]
    fn test_matching_names_do_not_conflict() {
        let ty = registered(register("Foo").named("Name", string_arg("Foo")));
        assert_eq!(resolve(&ty), ("Foo".to_string(), vec![]));
    }

    #[test]
    fn test_invalid_first_argument_type() {
        let attr = AttributeData::new(REGISTER_ATTRIBUTE).arg("System.Int32", AttributeValue::I4(4));
        let mut buffer = DiagnosticBuffer::new();
        let name = ClassNameResolver::default().resolve(&registered(attr), &mut buffer);

        assert_eq!(name, "App_Foo");
        let diags: Vec<_> = buffer.iter().collect();
        assert_eq!(diags[0].code, DiagnosticCode::InvalidArgumentType);
        assert!(diags[0].message.contains("System.Int32"));
        assert_eq!(diags[1].code, DiagnosticCode::MissingName);
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_unexpected_arity() {
        let attr = register_with(&["A", "B", "C"]);
        assert_eq!(
            resolve(&registered(attr)),
            (
                "App_Foo".to_string(),
                vec![DiagnosticCode::UnexpectedArity, DiagnosticCode::MissingName]
            )
        );
    }

    #[test]
    fn test_named_argument_handling() {
        let attr = register("Bar")
            .named("IsWrapper", AttributeValue::Bool(true))
            .named("SkipRegistration", AttributeValue::Bool(true))
            .named("Frobnicate", AttributeValue::I4(1))
            // fields are not inspected at all
            .field("Name", string_arg("Ignored"));

        assert_eq!(
            resolve(&registered(attr)),
            (
                "Bar".to_string(),
                vec![
                    DiagnosticCode::UnsupportedOption,
                    DiagnosticCode::UnsupportedNamedArgument
                ]
            )
        );
    }

    #[test]
    fn test_blank_name_falls_back() {
        let (name, codes) = resolve(&registered(register("   ")));
        assert_eq!(name, "App_Foo");
        assert_eq!(codes, vec![DiagnosticCode::MissingName]);

        let null_name = AttributeData::new(REGISTER_ATTRIBUTE).arg(STRING_TYPE, AttributeValue::Null);
        let (name, codes) = resolve(&registered(null_name));
        assert_eq!(name, "App_Foo");
        assert_eq!(codes, vec![DiagnosticCode::MissingName]);
    }

    #[test]
    fn test_non_string_name_property() {
        let attr = register("Bar").named("Name", AttributeValue::I4(3));
        assert_eq!(
            resolve(&registered(attr)),
            ("Bar".to_string(), vec![DiagnosticCode::InvalidArgumentType])
        );
    }

    #[test]
    fn test_duplicate_registration_uses_first() {
        let ty = TypeBuilder::class("App", "Foo")
            .attribute(register("First"))
            .attribute(register("Second"))
            .build()
            .unwrap();

        assert_eq!(
            resolve(&ty),
            (
                "First".to_string(),
                vec![DiagnosticCode::DuplicateRegistration]
            )
        );
    }

    #[test]
    fn test_custom_registration_attribute() {
        let config = NamingConfig::default().with_registration_attribute("My.ExportAttribute");
        let resolver = ClassNameResolver::new(&config);
        let ty = TypeBuilder::class("App", "Foo")
            .attribute(register("Ignored"))
            .attribute(AttributeData::new("My.ExportAttribute").arg(STRING_TYPE, string_arg("Used")))
            .build()
            .unwrap();

        let mut buffer = DiagnosticBuffer::new();
        assert_eq!(resolver.registration_attribute(), "My.ExportAttribute");
        assert_eq!(resolver.resolve(&ty, &mut buffer), "Used");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ty = registered(
            register_with(&["A", "B", "C"])
                .named("Name", string_arg("X"))
                .named("Other", AttributeValue::Bool(false)),
        );

        let mut first = DiagnosticBuffer::new();
        let mut second = DiagnosticBuffer::new();
        let resolver = ClassNameResolver::default();

        assert_eq!(resolver.resolve(&ty, &mut first), resolver.resolve(&ty, &mut second));
        assert_eq!(first, second);
    }
}
