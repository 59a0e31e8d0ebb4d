//! Declarative validation of the sign-in form values

pub use rule::*;
pub use schema::*;

mod rule;
mod schema;

use std::sync::OnceLock;

use crate::types::FormValues;

static SIGN_IN_SCHEMA: OnceLock<Schema> = OnceLock::new();

pub fn sign_in_schema() -> &'static Schema {
    SIGN_IN_SCHEMA.get_or_init(Schema::sign_in)
}

/// Runs the sign-in rules against `values`
pub fn validate(values: &FormValues) -> Verdict {
    sign_in_schema().validate(values)
}
