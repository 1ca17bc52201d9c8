//! The validation markers and the rule each one applies.
use crate::schema::Inspected;
use serde::Serialize;
use std::fmt;

pub(crate) mod email;
pub(crate) mod phone;
pub(crate) mod required;

/// The kind of check a validation marker performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    /// Fails on a null value or an empty string.
    Required,
    /// Fails on a non-empty string that is not an e-mail address.
    Email,
    /// Fails on a non-empty string that is not a phone number.
    Phone,
}

impl RuleKind {
    /// Format rules only apply to string-valued fields.
    pub fn is_format(&self) -> bool {
        matches!(self, RuleKind::Email | RuleKind::Phone)
    }

    pub fn default_message(&self, field: &str) -> String {
        match self {
            RuleKind::Required => format!("The {} field is required.", field),
            RuleKind::Email => format!("The {} field is not a valid e-mail address.", field),
            RuleKind::Phone => format!("The {} field is not a valid phone number.", field),
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    pub(crate) fn check(&self, value: Inspected<'_>) -> bool {
        match self {
            RuleKind::Required => required::validate_required(value),
            RuleKind::Email => email::validate_email(value),
            RuleKind::Phone => phone::validate_phone(value),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::Required => "required",
            RuleKind::Email => "email",
            RuleKind::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// A validation marker attached to a field, with an optional custom message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: Option<String>,
}

impl Rule {
    pub fn message_for(&self, field: &str) -> String {
        match &self.message {
            Some(custom) => custom.clone(),
            None => self.kind.default_message(field),
        }
    }
}

/// Shared skeleton of the format rules: nulls and empty strings are not
/// applicable, any other string must match `is_match`.
///
/// # Panics
/// On a non-string value. Schemas refuse format rules on non-string fields,
/// so this only fires when a `FieldValue` impl declares `IS_TEXT` but
/// inspects as something else.
pub(crate) fn validate_format(
    value: Inspected<'_>,
    rule: RuleKind,
    is_match: impl Fn(&str) -> bool,
) -> bool {
    match value {
        Inspected::Null => true,
        Inspected::Text(s) if s.is_empty() => true,
        Inspected::Text(s) => is_match(s),
        Inspected::Other => panic!("BUG: '{}' format rule applied to a non-string value", rule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RuleKind::Required, "The Name field is required.")]
    #[case(RuleKind::Email, "The Name field is not a valid e-mail address.")]
    #[case(RuleKind::Phone, "The Name field is not a valid phone number.")]
    fn test_default_messages(#[case] kind: RuleKind, #[case] expected: &str) {
        let rule = Rule { kind, message: None };
        assert_eq!(rule.message_for("Name"), expected);
    }

    #[test]
    fn test_custom_message_wins() {
        let rule = Rule { kind: RuleKind::Email, message: Some("Bad address".into()) };
        assert_eq!(rule.message_for("Email"), "Bad address");
    }

    #[test]
    #[should_panic(expected = "non-string")]
    fn test_format_rule_on_other_value_is_fatal() {
        validate_format(Inspected::Other, RuleKind::Email, |_| true);
    }
}
