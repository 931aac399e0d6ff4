//! Decoded attribute metadata.
//!
//! Attributes reach the engine already decoded by the metadata provider: constructor
//! arguments carry their declared parameter type, named arguments carry their member name
//! and whether they target a field or a property. The [`crate::naming::ClassNameResolver`]
//! reads the registration attribute from here.
//!
//! # Examples
//!
//! ```rust
//! use dotbind::metadata::customattributes::{AttributeData, AttributeValue};
//!
//! let register = AttributeData::new("Foundation.RegisterAttribute")
//!     .arg("System.String", AttributeValue::String("Bar".into()))
//!     .named("Name", AttributeValue::String("Foo".into()));
//!
//! assert!(register.fixed_args[0].is_string_typed());
//! assert_eq!(register.named_args[0].value.as_str(), Some("Foo"));
//! ```

mod types;

pub use types::*;
