//! Identifier and type name resolution for Objective-C bindings.
//!
//! This module turns managed type descriptors into the names a binding generator emits:
//!
//! - [`classify`] sorts a descriptor into one structural [`Category`]
//! - [`ClassNameResolver`] derives the Objective-C class name, honoring the registration
//!   attribute and reporting malformed usages as warnings
//! - [`TypeNameMapper`] spells a type in the Objective-C or the Mono embedding vocabulary
//! - [`ParameterNamer`] picks readable, collision-free parameter identifiers
//! - [`BindingSession`] runs all of the above for one generation run, collecting warnings into
//!   a shared [`crate::metadata::diagnostics::Diagnostics`] sink
//!
//! Every resolver is a pure function of its inputs and the [`NamingConfig`] it was built
//! from, and all of them are `Send + Sync`.
//!
//! # Examples
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let session = BindingSession::new(NamingConfig::xamarin_mac());
//! let point = TypeBuilder::structure("Geometry", "Point").build()?;
//! let points = TypeBuilder::array_of(&point).build()?;
//!
//! assert_eq!(session.class_name(&point), "Geometry_Point");
//! assert_eq!(session.type_name(&points, Vocabulary::Mono)?, "Geometry.Point[]");
//! assert!(session.type_name(&points, Vocabulary::ObjC).is_err());
//! # Ok::<(), dotbind::Error>(())
//! ```

mod classify;
mod classname;
mod config;
mod mapper;
mod params;
mod session;
pub mod tables;

pub use classify::{classify, Category};
pub use classname::{default_class_name, ClassNameResolver};
pub use config::{NamingConfig, FALLBACK_ARGUMENT, REGISTER_ATTRIBUTE};
pub use mapper::{mono_name, TypeNameMapper, Vocabulary};
pub use params::ParameterNamer;
pub use session::{BindingSession, Declaration, RenderedDeclaration, ResolvedClass};
