//! Method parameter descriptors.

use crate::metadata::typesystem::TypeDescriptorRc;

/// A single declared parameter of a method or constructor
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    /// Declared identifier, as written in the managed source
    pub name: String,
    /// Declared parameter type
    pub parameter_type: TypeDescriptorRc,
    /// Zero-based position within the parameter list
    pub position: usize,
}

impl ParameterDescriptor {
    /// Create a new parameter descriptor
    pub fn new(name: impl Into<String>, parameter_type: TypeDescriptorRc, position: usize) -> Self {
        ParameterDescriptor {
            name: name.into(),
            parameter_type,
            position,
        }
    }

    /// Build an ordered parameter list from `(name, type)` pairs, assigning positions
    pub fn list<'a, I>(params: I) -> Vec<ParameterDescriptor>
    where
        I: IntoIterator<Item = (&'a str, TypeDescriptorRc)>,
    {
        params
            .into_iter()
            .enumerate()
            .map(|(position, (name, ty))| ParameterDescriptor::new(name, ty, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::typesystem::{TypeBuilder, TypeCode};

    #[test]
    fn test_list_assigns_positions() {
        let double = TypeBuilder::primitive(TypeCode::Double).build().unwrap();
        let params = ParameterDescriptor::list([("x", double.clone()), ("y", double)]);

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].position, 0);
        assert_eq!(params[1].name, "y");
        assert_eq!(params[1].position, 1);
    }
}
