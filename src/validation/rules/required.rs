//! Validation rule for mandatory fields.
use crate::schema::Inspected;

/// A value is present when it is neither null nor an empty string.
/// Non-string values only fail when null.
pub(crate) fn validate_required(value: Inspected<'_>) -> bool {
    match value {
        Inspected::Null => false,
        Inspected::Text(s) => !s.is_empty(),
        Inspected::Other => true,
    }
}
