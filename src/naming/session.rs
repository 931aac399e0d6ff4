//! Binding session orchestration.
//!
//! A [`BindingSession`] ties the naming components to one generation run: it owns the
//! [`NamingConfig`], the [`TypeRegistry`] of classes being bound, and the run-wide
//! [`Diagnostics`] sink. Every call starts its own [`DiagnosticBuffer`] and flushes it into
//! the sink before returning, so callers see the "collect, decide, emit together" behavior
//! without handling buffers themselves.
//!
//! Batch operations ([`BindingSession::resolve_class_names`],
//! [`BindingSession::render_declarations`]) run on the rayon thread pool when
//! [`NamingConfig::parallel`] is set. Each task owns its buffer; buffers are flushed in input
//! order once all tasks are done, so the sink contents do not depend on scheduling.
//!
//! # Examples
//!
//! ```rust
//! use dotbind::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let widget = TypeBuilder::class("App.Widgets", "Button").build()?;
//! registry.insert(&widget)?;
//!
//! let session = BindingSession::with_registry(NamingConfig::default(), registry);
//! session.bind_class(&widget);
//!
//! let names = session.resolve_class_names(session.registry().as_ref());
//! assert_eq!(names[0].name, "App_Widgets_Button");
//! assert!(!session.diagnostics().has_any());
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    metadata::{
        diagnostics::{DiagnosticBuffer, Diagnostics},
        params::ParameterDescriptor,
        typesystem::{MetadataProvider, TypeDescriptor, TypeRegistry},
    },
    naming::{
        classify::{classify, Category},
        classname::ClassNameResolver,
        config::NamingConfig,
        mapper::{TypeNameMapper, Vocabulary},
        params::ParameterNamer,
    },
    Result,
};

/// Class name resolved for one type of a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass {
    /// Fully-qualified managed name
    pub full_name: String,
    /// Objective-C class name
    pub name: String,
}

/// A method or constructor whose parameters are rendered together
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Managed member name, used for reporting
    pub name: String,
    /// Ordered parameter list
    pub parameters: Vec<ParameterDescriptor>,
}

impl Declaration {
    /// Create a declaration
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterDescriptor>) -> Self {
        Declaration {
            name: name.into(),
            parameters,
        }
    }
}

/// Objective-C selector fragments of a [`Declaration`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeclaration {
    /// Managed member name
    pub name: String,
    /// `(<type>)<name>` for every parameter, in order
    pub parameters: Vec<String>,
}

/// Naming state of one generation run
pub struct BindingSession {
    config: NamingConfig,
    registry: Arc<TypeRegistry>,
    diagnostics: Arc<Diagnostics>,
}

impl BindingSession {
    /// Create a session with an empty registry
    #[must_use]
    pub fn new(config: NamingConfig) -> Self {
        Self::with_registry(config, Arc::new(TypeRegistry::new()))
    }

    /// Create a session over an existing registry
    #[must_use]
    pub fn with_registry(config: NamingConfig, registry: Arc<TypeRegistry>) -> Self {
        BindingSession {
            config,
            registry,
            diagnostics: Arc::new(Diagnostics::new()),
        }
    }

    /// The naming configuration
    #[must_use]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// The registry of known types and bound classes
    #[must_use]
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// The run-wide diagnostics sink
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Mark `class` as bound, so parameters of that type are passed as object pointers
    pub fn bind_class(&self, class: &TypeDescriptor) {
        self.registry.register_class(class);
    }

    fn scoped<R>(&self, f: impl FnOnce(&mut DiagnosticBuffer) -> R) -> R {
        let mut buffer = DiagnosticBuffer::new();
        let result = f(&mut buffer);
        buffer.flush_into(&self.diagnostics);
        result
    }

    /// Objective-C class name of `ty`
    pub fn class_name(&self, ty: &TypeDescriptor) -> String {
        let resolver = ClassNameResolver::new(&self.config);
        self.scoped(|buffer| resolver.resolve(ty, buffer))
    }

    /// Spelling of `ty` in `vocabulary`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if the vocabulary can not spell `ty`.
    pub fn type_name(&self, ty: &TypeDescriptor, vocabulary: Vocabulary) -> Result<String> {
        let mapper = TypeNameMapper::new(&self.config);
        self.scoped(|buffer| mapper.map(ty, vocabulary, buffer))
    }

    /// Default argument identifier for a value of type `ty`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if `ty` has no Objective-C spelling.
    pub fn default_argument_name(&self, ty: &TypeDescriptor) -> Result<String> {
        let namer = ParameterNamer::new(&self.config);
        self.scoped(|buffer| namer.default_argument_name(ty, buffer))
    }

    /// Unboxing accessor for values of type `ty`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if `ty` has no Objective-C spelling.
    pub fn value_accessor(&self, ty: &TypeDescriptor) -> Result<Option<&'static str>> {
        let namer = ParameterNamer::new(&self.config);
        self.scoped(|buffer| namer.value_accessor(ty, buffer))
    }

    /// Disambiguated identifier of `param` within `siblings`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if a parameter type has no Objective-C spelling.
    pub fn parameter_name(
        &self,
        param: &ParameterDescriptor,
        siblings: &[ParameterDescriptor],
    ) -> Result<String> {
        let namer = ParameterNamer::new(&self.config);
        self.scoped(|buffer| namer.disambiguated_name(param, siblings, buffer))
    }

    /// Objective-C type spelling of `param`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if the parameter type has no Objective-C spelling.
    pub fn parameter_type(&self, param: &ParameterDescriptor) -> Result<String> {
        let namer = ParameterNamer::new(&self.config);
        self.scoped(|buffer| namer.parameter_type(param, &self.registry, buffer))
    }

    /// `(<type>)<name>` selector fragment of `param`
    ///
    /// # Errors
    /// Returns [`crate::Error::CoverageGap`] if a parameter type has no Objective-C spelling.
    pub fn parameter_declaration(
        &self,
        param: &ParameterDescriptor,
        siblings: &[ParameterDescriptor],
    ) -> Result<String> {
        let namer = ParameterNamer::new(&self.config);
        self.scoped(|buffer| namer.declaration(param, siblings, &self.registry, buffer))
    }

    /// Run `task` over `items`, one diagnostic buffer per item, flushing in input order
    fn batch<T, R, F>(&self, items: &[T], task: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T, &mut DiagnosticBuffer) -> R + Sync,
    {
        let run = |item: &T| {
            let mut buffer = DiagnosticBuffer::new();
            let result = task(item, &mut buffer);
            (result, buffer)
        };

        let results: Vec<(R, DiagnosticBuffer)> = if self.config.parallel {
            items.par_iter().map(run).collect()
        } else {
            items.iter().map(run).collect()
        };

        results
            .into_iter()
            .map(|(result, mut buffer)| {
                buffer.flush_into(&self.diagnostics);
                result
            })
            .collect()
    }

    /// Resolve the Objective-C name of every named type (class, interface, struct, enum)
    /// of `provider`, in provider order
    pub fn resolve_class_names(&self, provider: &dyn MetadataProvider) -> Vec<ResolvedClass> {
        let named: Vec<_> = provider
            .types()
            .into_iter()
            .filter(|ty| matches!(classify(ty), Category::NamedObject | Category::Enum))
            .collect();

        let resolver = ClassNameResolver::new(&self.config);
        self.batch(&named, |ty, buffer| ResolvedClass {
            full_name: ty.full_name().to_string(),
            name: resolver.resolve(ty, buffer),
        })
    }

    /// Render the parameters of every declaration.
    ///
    /// A declaration with a parameter type that can not be spelled yields its
    /// [`crate::Error::CoverageGap`] in place; the other declarations are unaffected.
    pub fn render_declarations(
        &self,
        declarations: &[Declaration],
    ) -> Vec<Result<RenderedDeclaration>> {
        let namer = ParameterNamer::new(&self.config);
        let registry = self.registry.as_ref();

        self.batch(declarations, |declaration, buffer| {
            let parameters = declaration
                .parameters
                .iter()
                .map(|param| namer.declaration(param, &declaration.parameters, registry, buffer))
                .collect::<Result<Vec<_>>>();

            match parameters {
                Ok(parameters) => Ok(RenderedDeclaration {
                    name: declaration.name.clone(),
                    parameters,
                }),
                Err(error) => {
                    log::warn!("skipping declaration '{}': {}", declaration.name, error);
                    Err(error)
                }
            }
        })
    }
}
