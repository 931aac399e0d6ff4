use thiserror::Error;

use crate::naming::Vocabulary;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// Builds an [`Error::CoverageGap`] for a type descriptor that a vocabulary cannot spell.
///
/// ```rust, ignore
/// return Err(coverage_gap!(ty, Vocabulary::ObjC));
/// ```
macro_rules! coverage_gap {
    ($ty:expr, $vocabulary:expr) => {
        crate::Error::CoverageGap {
            type_name: $ty.full_name().to_string(),
            vocabulary: $vocabulary,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Name resolution itself never fails on bad attribute metadata: those problems are reported as
/// warnings through [`crate::metadata::diagnostics`]. The variants here are reserved for
/// conditions where no usable spelling exists, or where the metadata model was constructed
/// inconsistently.
///
/// # Error Categories
///
/// ## Resolution Errors
/// - [`Error::CoverageGap`] - A classified type has no spelling in a vocabulary
///
/// ## Metadata Model Errors
/// - [`Error::Malformed`] - A type descriptor was built from inconsistent input
/// - [`Error::TypeInsert`] - Failed to register a type in the [`crate::TypeRegistry`]
/// - [`Error::TypeNotFound`] - Requested type not found in the [`crate::TypeRegistry`]
///
/// # Examples
///
/// ```rust
/// use dotbind::{prelude::*, Error};
///
/// let void = TypeBuilder::void().build()?;
/// let array = TypeBuilder::array_of(&void).build()?;
///
/// let mut buffer = DiagnosticBuffer::new();
/// match TypeNameMapper::default().map(&array, Vocabulary::ObjC, &mut buffer) {
///     Ok(spelling) => println!("{spelling}"),
///     Err(Error::CoverageGap { type_name, vocabulary }) => {
///         eprintln!("cannot spell {type_name} in {vocabulary}");
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// # Ok::<(), dotbind::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A classified type has no entry in a vocabulary's mapping table.
    ///
    /// The generator was never taught to spell this type shape. Callers should abort the
    /// declaration that needed it and report the type name, rather than substituting a guess.
    ///
    /// # Fields
    ///
    /// * `type_name` - Fully-qualified name of the offending type
    /// * `vocabulary` - The vocabulary that has no spelling for it
    #[error("Type '{type_name}' has no spelling in the {vocabulary} vocabulary")]
    CoverageGap {
        /// Fully-qualified name of the type that could not be spelled
        type_name: String,
        /// The vocabulary that was asked to spell it
        vocabulary: Vocabulary,
    },

    /// A type descriptor could not be constructed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Failed to insert new type into the `TypeRegistry`.
    ///
    /// A type with the same fully-qualified name is already registered.
    #[error("Failed to insert new type into TypeRegistry - {0}")]
    TypeInsert(String),

    /// Failed to find type in the `TypeRegistry`.
    #[error("Failed to find type in TypeRegistry - {0}")]
    TypeNotFound(String),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}

impl Error {
    /// Returns true if this error is a [`Error::CoverageGap`].
    #[must_use]
    pub fn is_coverage_gap(&self) -> bool {
        matches!(self, Error::CoverageGap { .. })
    }
}
