//! Validation rule for phone numbers.
use super::{validate_format, RuleKind};
use crate::schema::Inspected;
use once_cell::sync::Lazy;
use regex::Regex;

// Optional leading '+', a 1-4 digit lead group, then 2-4 more groups of 2-4
// digits separated by a space, dot or dash, any group optionally parenthesised.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{1,4}\)?([ .\-]?\(?[0-9]{2,4}\)?){2,4}$")
        .expect("phone pattern compiles")
});

const MIN_DIGITS: usize = 7;

pub(crate) fn validate_phone(value: Inspected<'_>) -> bool {
    validate_format(value, RuleKind::Phone, |s| {
        PHONE_RE.is_match(s) && s.chars().filter(char::is_ascii_digit).count() >= MIN_DIGITS
    })
}
