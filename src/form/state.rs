use std::collections::{BTreeMap, BTreeSet};

use crate::types::{ErrorPath, Field, FieldError, FormValues, LoginRequest, UserPublic};
use crate::validation::{Schema, Verdict, sign_in_schema};

use super::SubmitOutcome;

/// Inputs tracked for changes, including the ones without rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Email,
    Password,
    Remember,
}

impl From<Field> for Input {
    fn from(field: Field) -> Self {
        match field {
            Field::Email => Input::Email,
            Field::Password => Input::Password,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

/// Live state of a sign-in form, from mount until unmount.
///
/// Every value change re-runs the schema. Only the changed input gets its
/// displayed error refreshed; a submission attempt refreshes all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    schema: Schema,
    defaults: FormValues,
    values: FormValues,
    dirty: BTreeSet<Input>,
    errors: BTreeMap<Field, String>,
    root_errors: Vec<(String, String)>,
    is_valid: bool,
    phase: SubmitPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(sign_in_schema().clone())
    }
}

impl FormState {
    pub fn new(schema: Schema) -> Self {
        Self::with_defaults(schema, FormValues::default())
    }

    pub fn with_defaults(schema: Schema, defaults: FormValues) -> Self {
        let is_valid = schema.validate(&defaults).is_valid;

        Self {
            schema,
            values: defaults.clone(),
            defaults,
            dirty: BTreeSet::new(),
            errors: BTreeMap::new(),
            root_errors: Vec::new(),
            is_valid,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.set_value(Field::Email, email);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.set_value(Field::Password, password);
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.values.email = value,
            Field::Password => self.values.password = value,
        }

        self.refresh_dirty(field.into());
        self.revalidate(&[field]);
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.values.remember = remember;
        self.refresh_dirty(Input::Remember);
        self.revalidate(&[]);
    }

    /// Shows an externally supplied error.
    ///
    /// The form counts as invalid until the next value change.
    pub fn set_error(&mut self, error: FieldError) {
        let FieldError { path, message } = error;
        match path {
            ErrorPath::Field(field) => {
                self.errors.insert(field, message);
            }
            ErrorPath::Root(key) => {
                match self.root_errors.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, existing)) => *existing = message,
                    None => self.root_errors.push((key, message)),
                }
            }
        }
        self.is_valid = false;
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Form-level errors keyed by their original path (`root`, `root.*`, ...),
    /// in the order they were first reported
    pub fn root_errors(&self) -> &[(String, String)] {
        &self.root_errors
    }

    pub fn root_error(&self, key: &str) -> Option<&str> {
        self.root_errors
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, message)| message.as_str())
    }

    pub fn dirty_inputs(&self) -> &BTreeSet<Input> {
        &self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_dirty() && self.is_valid && !self.is_pending()
    }

    /// Opens a submission attempt.
    ///
    /// Returns `None` without touching the state when the submit control
    /// is disabled. Otherwise drops form-level errors from the previous
    /// attempt and revalidates every field; the credentials are only handed
    /// out if that revalidation passes, in which case the form is pending
    /// until [`FormState::finish_submit`].
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if !self.can_submit() {
            log::debug!(
                "Sign-in submit ignored (dirty: {}, valid: {}, pending: {})",
                self.is_dirty(),
                self.is_valid,
                self.is_pending()
            );
            return None;
        }

        self.root_errors.clear();
        if !self.revalidate(&Field::ALL).is_valid {
            return None;
        }

        self.phase = SubmitPhase::Pending;

        Some(LoginRequest {
            email: self.values.email.clone(),
            password: self.values.password.clone(),
        })
    }

    pub fn finish_submit(
        &mut self,
        result: Result<UserPublic, Vec<FieldError>>,
    ) -> SubmitOutcome {
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(user) => {
                log::info!("Signed in as {} ({})", user.email, user.id);
                SubmitOutcome::SignedIn(user)
            }
            Err(errors) => {
                log::warn!("Sign-in rejected with {} error(s)", errors.len());
                for error in &errors {
                    self.set_error(error.clone());
                }
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    fn refresh_dirty(&mut self, input: Input) {
        let changed = match input {
            Input::Email => self.values.email != self.defaults.email,
            Input::Password => self.values.password != self.defaults.password,
            Input::Remember => self.values.remember != self.defaults.remember,
        };

        if changed {
            self.dirty.insert(input);
        } else {
            self.dirty.remove(&input);
        }
    }

    fn revalidate(&mut self, refresh: &[Field]) -> Verdict {
        let verdict = self.schema.validate(&self.values);

        for &field in refresh {
            match verdict.error(field) {
                Some(message) => {
                    self.errors.insert(field, message.to_string());
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
        self.is_valid = verdict.is_valid;

        verdict
    }
}
