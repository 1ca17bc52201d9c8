//! Defines the `FieldValue` contract every registered field type must meet.
//!
//! Change detection compares a field's current value against its baseline
//! with `PartialEq`, so structural equality is whatever the type's `PartialEq`
//! says it is. Derived `PartialEq` on a compound type gives deep equality.
use std::collections::BTreeMap;
use std::fmt::Debug;

/// How a validation rule sees a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspected<'a> {
    /// No value (e.g. `Option::None`).
    Null,
    /// A string value, possibly empty.
    Text(&'a str),
    /// Any non-string value.
    Other,
}

/// A value that can live in a tracked, validated field.
pub trait FieldValue: Clone + PartialEq + Debug + 'static {
    /// Whether the declared type is string-valued. Format rules are only
    /// accepted on fields where this is `true`.
    const IS_TEXT: bool;

    fn inspected(&self) -> Inspected<'_>;
}

impl FieldValue for String {
    const IS_TEXT: bool = true;

    fn inspected(&self) -> Inspected<'_> {
        Inspected::Text(self.as_str())
    }
}

impl FieldValue for &'static str {
    const IS_TEXT: bool = true;

    fn inspected(&self) -> Inspected<'_> {
        Inspected::Text(*self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const IS_TEXT: bool = T::IS_TEXT;

    fn inspected(&self) -> Inspected<'_> {
        match self {
            Some(v) => v.inspected(),
            None => Inspected::Null,
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const IS_TEXT: bool = false;

    fn inspected(&self) -> Inspected<'_> {
        Inspected::Other
    }
}

impl<K, V> FieldValue for BTreeMap<K, V>
where
    K: Clone + Ord + Debug + 'static,
    V: FieldValue,
{
    const IS_TEXT: bool = false;

    fn inspected(&self) -> Inspected<'_> {
        Inspected::Other
    }
}

macro_rules! opaque_field_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldValue for $t {
                const IS_TEXT: bool = false;

                fn inspected(&self) -> Inspected<'_> {
                    Inspected::Other
                }
            }
        )*
    };
}

opaque_field_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_follows_inner_text_flag() {
        assert!(<Option<String> as FieldValue>::IS_TEXT);
        assert!(!<Option<i32> as FieldValue>::IS_TEXT);
        assert!(!<Vec<String> as FieldValue>::IS_TEXT);
    }

    #[test]
    fn test_inspect_classifies_values() {
        assert_eq!(Some("x".to_string()).inspected(), Inspected::Text("x"));
        assert_eq!(None::<String>.inspected(), Inspected::Null);
        assert_eq!(String::new().inspected(), Inspected::Text(""));
        assert_eq!(42u8.inspected(), Inspected::Other);
        assert_eq!(vec![1, 2].inspected(), Inspected::Other);
    }
}
