//! Naming configuration for a binding session
//!
//! The defaults reproduce the conventions of Xamarin.Mac bindings: classes opt into an
//! explicit Objective-C name through `Foundation.RegisterAttribute`, and parameters with
//! names shorter than three characters are replaced by descriptive identifiers.

/// Default fully-qualified name of the registration attribute
pub const REGISTER_ATTRIBUTE: &str = "Foundation.RegisterAttribute";

/// Default identifier used for parameters whose type has no table entry
pub const FALLBACK_ARGUMENT: &str = "anObject";

/// Configuration for name resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    /// Fully-qualified attribute type that carries an explicit class name
    pub registration_attribute: String,

    /// Parameter names shorter than this are replaced by derived identifiers (default: 3)
    pub short_name_threshold: usize,

    /// Identifier used when a short-named parameter's type has no table entry
    pub fallback_argument: String,

    /// Resolve session-wide class names on the rayon thread pool
    pub parallel: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            registration_attribute: REGISTER_ATTRIBUTE.to_string(),
            short_name_threshold: 3,
            fallback_argument: FALLBACK_ARGUMENT.to_string(),
            parallel: true,
        }
    }
}

impl NamingConfig {
    /// Xamarin.Mac conventions, same as [`NamingConfig::default`]
    #[must_use]
    pub fn xamarin_mac() -> Self {
        Self::default()
    }

    /// Default conventions, resolving everything on the calling thread
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Use a different registration attribute type
    #[must_use]
    pub fn with_registration_attribute(mut self, attribute_type: impl Into<String>) -> Self {
        self.registration_attribute = attribute_type.into();
        self
    }

    /// Change the length below which parameter names are replaced
    #[must_use]
    pub fn with_short_name_threshold(mut self, threshold: usize) -> Self {
        self.short_name_threshold = threshold;
        self
    }

    /// Change the generic fallback argument identifier
    #[must_use]
    pub fn with_fallback_argument(mut self, identifier: impl Into<String>) -> Self {
        self.fallback_argument = identifier.into();
        self
    }
}
