use crate::form::Authenticator;
use crate::types::*;
use leptos::prelude::*;

/// Sign-in server function - checks credentials against the store in context
#[server(SignIn, "/api")]
pub async fn sign_in(email: String, password: String) -> Result<SignInReply, ServerFnError> {
    use crate::services::CredentialStore;
    use std::sync::Arc;

    let store = use_context::<Arc<CredentialStore>>()
        .ok_or_else(|| ServerFnError::new("Credential store is not available"))?;

    let result = store
        .sign_in_with_email_and_password(&email, &password)
        .await;

    Ok(result.into())
}

/// Authenticator backed by the [`sign_in`] server function.
///
/// Transport failures surface as a `root.server` form-level error.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnAuthenticator;

impl Authenticator for ServerFnAuthenticator {
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserPublic, Vec<FieldError>> {
        match sign_in(email.to_string(), password.to_string()).await {
            Ok(reply) => reply.into_result(),
            Err(e) => {
                log::error!("Sign-in request failed: {}", e);
                Err(vec![FieldError::new(
                    ErrorPath::root_with("server"),
                    e.to_string(),
                )])
            }
        }
    }
}
