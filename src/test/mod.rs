use crate::{
    metadata::{
        customattributes::{AttributeData, AttributeValue, STRING_TYPE},
        typesystem::{TypeBuilder, TypeCode, TypeDescriptorRc},
    },
    naming::REGISTER_ATTRIBUTE,
};

// Helper function to create the descriptor of a built-in type
pub fn primitive(code: TypeCode) -> TypeDescriptorRc {
    TypeBuilder::primitive(code).build().unwrap()
}

// Helper function to create a string attribute value
pub fn string_arg(value: &str) -> AttributeValue {
    AttributeValue::String(value.to_string())
}

// Helper function to create a registration attribute carrying one positional name
pub fn register(name: &str) -> AttributeData {
    register_with(&[name])
}

// Helper function to create a registration attribute with any number of positional names
pub fn register_with(names: &[&str]) -> AttributeData {
    names
        .iter()
        .fold(AttributeData::new(REGISTER_ATTRIBUTE), |attr, name| {
            attr.arg(STRING_TYPE, string_arg(name))
        })
}
