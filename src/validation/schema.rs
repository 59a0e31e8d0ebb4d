use std::collections::BTreeMap;

use crate::types::{Field, FormValues};

use super::Rule;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: String,
}

/// Ordered rule chains, one per field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    chains: BTreeMap<Field, Vec<FieldRule>>,
}

/// Result of running a [`Schema`] against a set of values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl Verdict {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the sign-in form
    pub fn sign_in() -> Self {
        Self::new()
            .rule(Field::Email, Rule::Required, "You must enter a email")
            .rule(
                Field::Email,
                Rule::EmailFormat,
                "You must enter a valid email",
            )
            .rule(
                Field::Password,
                Rule::Required,
                "Please enter your password.",
            )
            .rule(
                Field::Password,
                Rule::MinLength(4),
                "Password is too short - must be at least 4 chars.",
            )
    }

    /// Appends a rule to the end of `field`'s chain.
    pub fn rule(
        mut self,
        field: Field,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        self.chains.entry(field).or_default().push(FieldRule {
            rule,
            message: message.into(),
        });
        self
    }

    pub fn rules(&self, field: Field) -> &[FieldRule] {
        self.chains.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Message of the first rule in `field`'s chain that `value` fails
    pub fn first_failure(&self, field: Field, value: &str) -> Option<&str> {
        self.rules(field)
            .iter()
            .find(|entry| !entry.rule.check(value))
            .map(|entry| entry.message.as_str())
    }

    pub fn validate(&self, values: &FormValues) -> Verdict {
        let errors: BTreeMap<Field, String> = self
            .chains
            .keys()
            .filter_map(|&field| {
                self.first_failure(field, values.get(field))
                    .map(|message| (field, message.to_string()))
            })
            .collect();

        Verdict {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
