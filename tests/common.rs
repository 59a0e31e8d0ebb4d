#![allow(dead_code)]

use std::sync::Mutex;

use signin::form::{Authenticator, FormState};
use signin::services::{CredentialStore, HashCost, PasswordManager};
use signin::types::*;

pub const SEED_EMAIL: &str = "user0@test.com";
pub const SEED_PASSWORD: &str = "password0";

pub fn get_seed_user_0() -> UserPublic {
    UserPublic {
        id: "00000000-0000-0000-0000-000000000000".to_string(),
        email: SEED_EMAIL.to_string(),
        username: Some("user0".to_string()),
    }
}

pub fn get_filled_form(email: &str, password: &str) -> FormState {
    let mut form = FormState::default();
    form.set_email(email);
    form.set_password(password);
    form
}

pub fn get_fast_store() -> CredentialStore {
    let passwords =
        PasswordManager::new(HashCost::Fast).expect("Invalid fast hash cost");
    CredentialStore::new(passwords).expect("Failed to build credential store")
}

pub fn get_seeded_store() -> CredentialStore {
    let store = get_fast_store();
    store
        .register(SEED_EMAIL, SEED_PASSWORD, None)
        .expect("Failed to register seed account");
    store
}

/// Authenticator replaying a fixed answer and recording every call
pub struct ScriptedAuthenticator {
    reply: Result<UserPublic, Vec<FieldError>>,
    calls: Mutex<Vec<LoginRequest>>,
}

impl ScriptedAuthenticator {
    pub fn accepting(user: UserPublic) -> Self {
        Self {
            reply: Ok(user),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(errors: Vec<FieldError>) -> Self {
        Self {
            reply: Err(errors),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<LoginRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Authenticator for ScriptedAuthenticator {
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserPublic, Vec<FieldError>> {
        self.calls.lock().unwrap().push(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.reply.clone()
    }
}
