//! Attribute data attached to type descriptors.
//!
//! These types mirror the already-decoded form of a custom attribute: the constructor's fixed
//! arguments with their declared types, followed by named field and property assignments.
//! Decoding attribute blobs is the metadata provider's job; the resolver only reads values.

use std::fmt;

/// Fully-qualified name of the runtime string type, as used in declared argument types
pub const STRING_TYPE: &str = "System.String";

/// A single decoded attribute, as attached to a type
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeData {
    /// Fully-qualified name of the attribute type, e.g. `Foundation.RegisterAttribute`
    pub attribute_type: String,
    /// Fixed arguments from the constructor signature, in order
    pub fixed_args: Vec<AttributeArgument>,
    /// Named arguments (fields and properties), in declaration order
    pub named_args: Vec<AttributeNamedArgument>,
}

impl AttributeData {
    /// Create an attribute without arguments
    pub fn new(attribute_type: impl Into<String>) -> Self {
        AttributeData {
            attribute_type: attribute_type.into(),
            fixed_args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Append a constructor argument
    ///
    /// ## Arguments
    /// * 'arg_type' - Fully-qualified declared type of the constructor parameter
    /// * 'value'    - The decoded value
    #[must_use]
    pub fn arg(mut self, arg_type: impl Into<String>, value: AttributeValue) -> Self {
        self.fixed_args.push(AttributeArgument {
            arg_type: arg_type.into(),
            value,
        });
        self
    }

    /// Append a named property assignment
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.named_args.push(AttributeNamedArgument {
            is_field: false,
            name: name.into(),
            value,
        });
        self
    }

    /// Append a named field assignment
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.named_args.push(AttributeNamedArgument {
            is_field: true,
            name: name.into(),
            value,
        });
        self
    }
}

/// A constructor argument together with the declared parameter type
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArgument {
    /// Fully-qualified declared type of the constructor parameter
    pub arg_type: String,
    /// The decoded value
    pub value: AttributeValue,
}

impl AttributeArgument {
    /// Check if the declared parameter type is the runtime string type
    #[must_use]
    pub fn is_string_typed(&self) -> bool {
        self.arg_type == STRING_TYPE
    }
}

/// Represents a named argument (field or property) in an attribute
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Value of the argument
    pub value: AttributeValue,
}

/// Represents a single decoded attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 8-bit integer
    I1(i8),
    /// Unsigned 8-bit integer
    U1(u8),
    /// Signed 16-bit integer
    I2(i16),
    /// Unsigned 16-bit integer
    U2(u16),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Null string or object reference
    Null,
    /// Type reference (as string)
    Type(String),
    /// Array of values
    Array(Vec<AttributeValue>),
    /// Enum value (enum type name + underlying value)
    Enum(String, Box<AttributeValue>),
}

impl AttributeValue {
    /// Returns the string payload, if this is a string value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::Char(v) => write!(f, "'{v}'"),
            AttributeValue::I1(v) => write!(f, "{v}"),
            AttributeValue::U1(v) => write!(f, "{v}"),
            AttributeValue::I2(v) => write!(f, "{v}"),
            AttributeValue::U2(v) => write!(f, "{v}"),
            AttributeValue::I4(v) => write!(f, "{v}"),
            AttributeValue::U4(v) => write!(f, "{v}"),
            AttributeValue::I8(v) => write!(f, "{v}"),
            AttributeValue::U8(v) => write!(f, "{v}"),
            AttributeValue::R4(v) => write!(f, "{v}"),
            AttributeValue::R8(v) => write!(f, "{v}"),
            AttributeValue::String(v) => write!(f, "\"{v}\""),
            AttributeValue::Null => write!(f, "null"),
            AttributeValue::Type(v) => write!(f, "typeof({v})"),
            AttributeValue::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            AttributeValue::Enum(ty, value) => write!(f, "({ty}){value}"),
        }
    }
}
