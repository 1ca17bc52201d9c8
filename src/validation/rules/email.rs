//! Validation rule for e-mail addresses.
use super::{validate_format, RuleKind};
use crate::schema::Inspected;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub(crate) fn validate_email(value: Inspected<'_>) -> bool {
    validate_format(value, RuleKind::Email, |s| EMAIL_RE.is_match(s))
}
