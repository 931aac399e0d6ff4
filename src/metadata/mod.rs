//! Read-only metadata model consumed by the naming engine.
//!
//! This module describes managed types the way a metadata provider hands them to the
//! binding generator: type descriptors with their structural flags and element types,
//! decoded attributes, method parameters, and the diagnostics produced while resolving
//! names for them. Nothing in here parses assemblies; that happens before the engine runs.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type descriptors, builder, registry and provider interface
//! - [`customattributes`] - Decoded attribute arguments
//! - [`params`] - Method parameter descriptors
//! - [`diagnostics`] - Warning codes, scoped buffers and the run-wide sink
//!
//! # Examples
//!
//! ```rust
//! use dotbind::metadata::{
//!     params::ParameterDescriptor,
//!     typesystem::{TypeBuilder, TypeCode},
//! };
//!
//! let double = TypeBuilder::primitive(TypeCode::Double).build()?;
//! let params = ParameterDescriptor::list([("a", double.clone()), ("b", double)]);
//!
//! assert_eq!(params[1].position, 1);
//! # Ok::<(), dotbind::Error>(())
//! ```

/// Implementation of decoded attribute data
pub mod customattributes;
/// Implementation of the diagnostics collected during name resolution
pub mod diagnostics;
/// Implementation of method parameter descriptors
pub mod params;
/// Implementation of type descriptors and the session type registry
pub mod typesystem;
