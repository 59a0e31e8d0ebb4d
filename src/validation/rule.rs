use regex::Regex;

use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("Invalid email pattern")
    })
}

/// A single check applied to one input value.
///
/// `MinLength` and `EmailFormat` let an empty value through so that a
/// missing value is always reported by `Required`. `MinLength` counts
/// UTF-16 code units, the way browser string lengths are measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    EmailFormat,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::MinLength(min) => {
                value.is_empty() || value.encode_utf16().count() >= *min
            }
            Rule::EmailFormat => {
                value.is_empty() || email_pattern().is_match(value)
            }
        }
    }
}
