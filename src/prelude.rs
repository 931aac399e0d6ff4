//! # dotbind Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! dotbind library. Import this module to get quick access to everything a binding generator
//! needs for resolving names.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotbind operations
pub use crate::Error;

/// The result type used throughout dotbind
pub use crate::Result;

/// Configuration for name resolution
pub use crate::naming::NamingConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Naming state of one generation run, with its batch inputs and outputs
pub use crate::naming::{BindingSession, Declaration, RenderedDeclaration, ResolvedClass};

// ================================================================================================
// Type Model
// ================================================================================================

/// Type descriptors and their construction
pub use crate::metadata::typesystem::{
    MetadataProvider, PrimitiveKind, TypeBuilder, TypeCode, TypeDescriptor, TypeDescriptorList,
    TypeDescriptorRc, TypeFlags, TypeRegistry,
};

/// Decoded custom attributes
pub use crate::metadata::customattributes::{
    AttributeArgument, AttributeData, AttributeNamedArgument, AttributeValue,
};

/// Method parameters
pub use crate::metadata::params::ParameterDescriptor;

// ================================================================================================
// Name Resolution
// ================================================================================================

/// Resolvers and vocabularies
pub use crate::naming::{
    classify, mono_name, Category, ClassNameResolver, ParameterNamer, TypeNameMapper, Vocabulary,
};

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Warning collection
pub use crate::metadata::diagnostics::{
    Diagnostic, DiagnosticBuffer, DiagnosticCategory, DiagnosticCode, DiagnosticSeverity,
    Diagnostics,
};
