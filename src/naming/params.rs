//! Parameter identifiers and parameter type spellings.
//!
//! Managed parameter names are often too short to read well inside an Objective-C selector
//! (`x`, `id`, `a`). Names shorter than the configured threshold are replaced by an
//! identifier derived from the parameter's Objective-C type (`anInt`, `aDouble`, ...). When
//! that would give several parameters of one signature the same identifier, the original
//! name is appended in PascalCase (`aDoubleA`, `aDoubleB`).
//!
//! # Examples
//!
//! ```rust
//! use dotbind::{
//!     metadata::{
//!         diagnostics::DiagnosticBuffer,
//!         params::ParameterDescriptor,
//!         typesystem::{TypeBuilder, TypeCode},
//!     },
//!     naming::ParameterNamer,
//! };
//!
//! let double = TypeBuilder::primitive(TypeCode::Double).build()?;
//! let params = ParameterDescriptor::list([("a", double.clone()), ("b", double)]);
//!
//! let namer = ParameterNamer::default();
//! let mut buffer = DiagnosticBuffer::new();
//! assert_eq!(namer.disambiguated_name(&params[0], &params, &mut buffer)?, "aDoubleA");
//! assert_eq!(namer.disambiguated_name(&params[1], &params, &mut buffer)?, "aDoubleB");
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::borrow::Cow;

use crate::{
    metadata::{
        diagnostics::DiagnosticBuffer,
        params::ParameterDescriptor,
        typesystem::{TypeDescriptor, TypeRegistry},
    },
    naming::{
        classify::{classify, Category},
        config::{NamingConfig, FALLBACK_ARGUMENT},
        mapper::{objc_primitive, TypeNameMapper},
        tables,
    },
    Result,
};

/// Derives Objective-C parameter identifiers and parameter type spellings
#[derive(Debug, Clone)]
pub struct ParameterNamer<'a> {
    mapper: TypeNameMapper<'a>,
    short_name_threshold: usize,
    fallback_argument: Cow<'a, str>,
}

impl Default for ParameterNamer<'_> {
    fn default() -> Self {
        ParameterNamer {
            mapper: TypeNameMapper::default(),
            short_name_threshold: 3,
            fallback_argument: Cow::Borrowed(FALLBACK_ARGUMENT),
        }
    }
}

impl<'a> ParameterNamer<'a> {
    /// Create a namer following `config`
    #[must_use]
    pub fn new(config: &'a NamingConfig) -> Self {
        ParameterNamer {
            mapper: TypeNameMapper::new(config),
            short_name_threshold: config.short_name_threshold,
            fallback_argument: Cow::Borrowed(&config.fallback_argument),
        }
    }

    /// The type name mapper used for parameter types
    #[must_use]
    pub fn mapper(&self) -> &TypeNameMapper<'a> {
        &self.mapper
    }

    fn is_short(&self, name: &str) -> bool {
        name.chars().count() < self.short_name_threshold
    }

    /// Default argument identifier for a value of type `ty`.
    ///
    /// Arrays and by-references are named after their element (`Int32Array`, `PointRef`);
    /// other types use the argument table, falling back to the type's simple name.
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if `ty` has no Objective-C spelling.
    pub fn default_argument_name(
        &self,
        ty: &TypeDescriptor,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        match classify(ty) {
            Category::Array(element) => Ok(format!("{}Array", element.name())),
            Category::ByReference(element) => Ok(format!("{}Ref", element.name())),
            _ => {
                let spelling = self.mapper.objc_name(ty, diagnostics)?;
                Ok(tables::argument_name(&spelling)
                    .map_or_else(|| ty.name().to_string(), str::to_string))
            }
        }
    }

    /// Identifier for `param` inside the parameter list `siblings`.
    ///
    /// `siblings` is the complete, ordered parameter list `param` belongs to, `param`
    /// included. Names at or above the threshold are kept as written. Shorter names are
    /// replaced by the table identifier for the parameter's type (or the fallback argument),
    /// and suffixed with the PascalCase original name when more than one short-named
    /// parameter shares the type, or when the fallback is used and more than one parameter
    /// has an unmapped type.
    ///
    /// Only warnings about `param`'s own type are appended to `diagnostics`.
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if the type of `param` or of any sibling has no
    /// Objective-C spelling.
    pub fn disambiguated_name(
        &self,
        param: &ParameterDescriptor,
        siblings: &[ParameterDescriptor],
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        if !self.is_short(&param.name) {
            return Ok(param.name.clone());
        }

        let spelling = self.mapper.objc_name(&param.parameter_type, diagnostics)?;
        let mut candidate = tables::argument_name(&spelling)
            .map_or_else(|| self.fallback_argument.to_string(), str::to_string);

        // sibling warnings belong to the sibling's own resolution
        let mut scratch = DiagnosticBuffer::new();
        let mut same_type_short_named = 0;
        let mut unmapped = 0;
        for sibling in siblings {
            let sibling_spelling = self.mapper.objc_name(&sibling.parameter_type, &mut scratch)?;
            if sibling_spelling == spelling && self.is_short(&sibling.name) {
                same_type_short_named += 1;
            }
            if !tables::has_argument_name(&sibling_spelling) {
                unmapped += 1;
            }
        }

        if same_type_short_named > 1 || (candidate == self.fallback_argument && unmapped > 1) {
            candidate.push_str(&pascal_case(&param.name));
        }

        log::trace!("parameter '{}' named '{}'", param.name, candidate);
        Ok(candidate)
    }

    /// Objective-C type spelling of `param` in a method declaration.
    ///
    /// Interfaces are spelled as `id<Protocol>`, classes bound by the current session
    /// (tracked in `registry`) as object pointers.
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if the parameter type has no Objective-C spelling.
    pub fn parameter_type(
        &self,
        param: &ParameterDescriptor,
        registry: &TypeRegistry,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        let ty = &param.parameter_type;
        let mut spelling = self.mapper.objc_name(ty, diagnostics)?;

        if ty.is_interface() {
            spelling = format!("id<{spelling}>");
        }
        if registry.has_class(ty) {
            spelling.push_str(" *");
        }

        Ok(spelling)
    }

    /// Selector fragment for `param`: `(<type>)<name>`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if a parameter type in `siblings` has no
    /// Objective-C spelling.
    pub fn declaration(
        &self,
        param: &ParameterDescriptor,
        siblings: &[ParameterDescriptor],
        registry: &TypeRegistry,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<String> {
        let ty = self.parameter_type(param, registry, diagnostics)?;
        // the type's warnings are already in the buffer
        let name = self.disambiguated_name(param, siblings, &mut DiagnosticBuffer::new())?;
        Ok(format!("({ty}){name}"))
    }

    /// The Foundation accessor unboxing a value of type `ty` from `NSNumber` or
    /// `NSDecimalNumber`, e.g. `intValue`. Enums use the accessor of their underlying type.
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if `ty` has no Objective-C spelling.
    pub fn value_accessor(
        &self,
        ty: &TypeDescriptor,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Result<Option<&'static str>> {
        if matches!(classify(ty), Category::Enum) {
            return Ok(ty
                .type_code()
                .primitive()
                .and_then(|kind| tables::value_accessor(objc_primitive(kind))));
        }

        let spelling = self.mapper.objc_name(ty, diagnostics)?;
        Ok(tables::value_accessor(&spelling))
    }
}

/// Uppercase the first character, keeping the rest as written
fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
