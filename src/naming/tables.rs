//! Static lookup tables keyed by Objective-C type spelling.
//!
//! Both tables are built once on first use and never mutated, so they can be read from any
//! thread without synchronization.

use std::{collections::HashMap, sync::OnceLock};

/// Objective-C type spelling to the default argument identifier for that type.
static ARGUMENT_NAMES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Objective-C type spelling to the Foundation accessor that unboxes a value of that type.
static VALUE_ACCESSORS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn argument_names() -> &'static HashMap<&'static str, &'static str> {
    ARGUMENT_NAMES.get_or_init(|| {
        HashMap::from([
            ("bool", "aBool"),
            ("unsigned short", "aUshort"),
            ("signed char", "aSbyte"),
            ("unsigned char", "aByte"),
            ("short", "aShort"),
            ("int", "anInt"),
            ("unsigned int", "aUint"),
            ("long long", "aLong"),
            ("unsigned long long", "aUlong"),
            ("float", "aFloat"),
            ("double", "aDouble"),
            ("NSString *", "aString"),
            ("NSDecimalNumber *", "aDecimal"),
            ("NSData *", "aData"),
            ("NSObject", "anObject"),
        ])
    })
}

fn value_accessors() -> &'static HashMap<&'static str, &'static str> {
    VALUE_ACCESSORS.get_or_init(|| {
        HashMap::from([
            ("bool", "boolValue"),
            ("unsigned short", "unsignedShortValue"),
            ("signed char", "charValue"),
            ("unsigned char", "unsignedCharValue"),
            ("short", "shortValue"),
            ("int", "intValue"),
            ("unsigned int", "unsignedIntValue"),
            ("long long", "longLongValue"),
            ("unsigned long long", "unsignedLongLongValue"),
            ("float", "floatValue"),
            ("double", "doubleValue"),
            ("NSDecimalNumber *", "decimalValue"),
        ])
    })
}

/// Default argument identifier for an Objective-C type spelling, e.g. `int` -> `anInt`
#[must_use]
pub fn argument_name(objc_type: &str) -> Option<&'static str> {
    argument_names().get(objc_type).copied()
}

/// Check if an Objective-C type spelling has a default argument identifier
#[must_use]
pub fn has_argument_name(objc_type: &str) -> bool {
    argument_names().contains_key(objc_type)
}

/// Unboxing accessor for an Objective-C type spelling, e.g. `double` -> `doubleValue`
#[must_use]
pub fn value_accessor(objc_type: &str) -> Option<&'static str> {
    value_accessors().get(objc_type).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_names() {
        assert_eq!(argument_name("int"), Some("anInt"));
        assert_eq!(argument_name("double"), Some("aDouble"));
        assert_eq!(argument_name("NSString *"), Some("aString"));
        assert_eq!(argument_name("NSObject"), Some("anObject"));
        assert_eq!(argument_name("App_Widget"), None);
        assert!(has_argument_name("bool"));
        assert!(!has_argument_name("NSArray<NSNumber *> *"));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(value_accessor("int"), Some("intValue"));
        assert_eq!(value_accessor("unsigned long long"), Some("unsignedLongLongValue"));
        assert_eq!(value_accessor("NSDecimalNumber *"), Some("decimalValue"));
        assert_eq!(value_accessor("NSString *"), None);
    }

    #[test]
    fn test_every_accessor_type_has_an_argument_name() {
        for objc_type in value_accessors().keys() {
            assert!(has_argument_name(objc_type), "{objc_type}");
        }
    }
}
