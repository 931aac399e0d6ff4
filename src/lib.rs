// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotbind
//!
//! Name resolution for generating Objective-C bindings from .NET assemblies.
//!
//! A binding generator walks the public surface of a managed assembly and emits an
//! Objective-C API that forwards into the Mono runtime. Every managed type, parameter and
//! argument on that surface needs two spellings: one in Objective-C headers and one in the
//! Mono method-signature syntax used to look up the managed target. `dotbind` provides those
//! spellings.
//!
//! ## Features
//!
//! - **Class names** - `Namespace_Type` defaults, explicit names through
//!   `Foundation.RegisterAttribute`, malformed attribute usages reported as warnings
//! - **Type spellings** - Nullability-annotated Objective-C pointers, `NSArray` generics, Mono
//!   signature names
//! - **Parameter identifiers** - Readable, collision-free names for short managed parameters
//! - **Diagnostics** - Warnings collected per resolution and emitted together into a lock-free
//!   sink
//! - **Parallel sessions** - Batch resolution on the rayon thread pool with deterministic
//!   diagnostic order
//!
//! ## Quick Start
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let session = BindingSession::new(NamingConfig::default());
//!
//! let button = TypeBuilder::class("App.Widgets", "Button")
//!     .attribute(
//!         AttributeData::new("Foundation.RegisterAttribute")
//!             .arg("System.String", AttributeValue::String("XButton".to_string())),
//!     )
//!     .build()?;
//! let button_ref = TypeBuilder::by_ref(&button).build()?;
//!
//! assert_eq!(session.class_name(&button), "XButton");
//! assert_eq!(
//!     session.type_name(&button_ref, Vocabulary::ObjC)?,
//!     "XButton * _Nonnull * _Nullable"
//! );
//! assert_eq!(session.type_name(&button_ref, Vocabulary::Mono)?, "object&");
//! # Ok::<(), dotbind::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`metadata`] - The managed type model, attribute values and diagnostics
//! - [`naming`] - Classification, class names, type spellings and parameter identifiers
//! - [`Error`] and [`Result`] - Error handling
//!
//! Resolution never fails on malformed attribute metadata; those problems become warnings in
//! [`metadata::diagnostics`]. The only resolution error is [`Error::CoverageGap`], raised for a
//! type shape a vocabulary has no spelling for.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use dotbind::prelude::*;
///
/// let session = BindingSession::new(NamingConfig::sequential());
/// let int = TypeBuilder::primitive(TypeCode::Int32).build()?;
/// assert_eq!(session.type_name(&int, Vocabulary::ObjC)?, "int");
/// # Ok::<(), dotbind::Error>(())
/// ```
pub mod prelude;

/// The managed type model consumed by name resolution.
///
/// # Key Components
///
/// - [`metadata::typesystem`] - Type descriptors, [`TypeBuilder`] and the [`TypeRegistry`]
/// - [`metadata::customattributes`] - Decoded custom attribute values
/// - [`metadata::params`] - Method parameter descriptors
/// - [`metadata::diagnostics`] - Warning collection
pub mod metadata;

/// Identifier and type name resolution.
///
/// # Key Components
///
/// - [`naming::classify`] - Structural classification of descriptors
/// - [`naming::ClassNameResolver`] - Objective-C class names
/// - [`naming::TypeNameMapper`] - Objective-C and Mono type spellings
/// - [`naming::ParameterNamer`] - Parameter identifiers
/// - [`naming::BindingSession`] - Orchestration for a whole generation run
pub mod naming;

/// `dotbind` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotbind` Error type
///
/// # Examples
///
/// ```rust
/// use dotbind::{prelude::*, Error};
///
/// let void = TypeBuilder::void().build()?;
/// let void_ref = TypeBuilder::by_ref(&void).build()?;
///
/// match BindingSession::new(NamingConfig::default()).type_name(&void_ref, Vocabulary::Mono) {
///     Ok(name) => println!("{name}"),
///     Err(Error::CoverageGap { type_name, .. }) => assert_eq!(type_name, "System.Void&"),
///     Err(e) => println!("Error: {e}"),
/// }
/// # Ok::<(), dotbind::Error>(())
/// ```
pub use error::Error;

/// Registry of known types and of the classes bound in a session.
///
/// See [`metadata::typesystem::TypeRegistry`].
pub use metadata::typesystem::TypeRegistry;

/// Fluent construction of type descriptors.
///
/// See [`metadata::typesystem::TypeBuilder`].
pub use metadata::typesystem::TypeBuilder;

/// Naming state of one generation run.
///
/// See [`naming::BindingSession`].
pub use naming::BindingSession;

/// Configuration for name resolution.
///
/// See [`naming::NamingConfig`].
pub use naming::NamingConfig;
