use std::future::Future;

use crate::types::{FieldError, FormValues, UserPublic};

use super::FormState;

/// The service that checks credentials.
///
/// Resolves with the signed-in user, or rejects with the errors to show on
/// the form. Each call settles exactly once; there is no retry or timeout.
pub trait Authenticator {
    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserPublic, Vec<FieldError>>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit control was disabled; nothing was sent
    Blocked,
    SignedIn(UserPublic),
    Rejected(Vec<FieldError>),
}

impl SubmitOutcome {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SubmitOutcome::SignedIn(_))
    }
}

pub struct SubmissionController<A> {
    authenticator: A,
}

impl<A: Authenticator> SubmissionController<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Submits the form through its submit control.
    ///
    /// The only suspension point is the authenticator call.
    pub async fn submit(&self, form: &mut FormState) -> SubmitOutcome {
        let Some(request) = form.begin_submit() else {
            return SubmitOutcome::Blocked;
        };

        let result = self
            .authenticator
            .sign_in_with_email_and_password(&request.email, &request.password)
            .await;

        form.finish_submit(result)
    }

    /// Calls the authenticator directly, skipping the form's submit gate.
    pub async fn submit_values(
        &self,
        values: &FormValues,
    ) -> Result<UserPublic, Vec<FieldError>> {
        self.authenticator
            .sign_in_with_email_and_password(&values.email, &values.password)
            .await
    }
}
