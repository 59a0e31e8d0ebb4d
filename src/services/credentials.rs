use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::common::CredentialError;
use crate::form::Authenticator;
use crate::types::{Field, FieldError, UserPublic};

use super::PasswordManager;

const UNKNOWN_EMAIL: &str = "Check your email address";
const WRONG_PASSWORD: &str = "Check your password";
const INTERNAL: &str = "An unexpected error occurred";

struct Account {
    password_hash: String,
    user: UserPublic,
}

/// In-memory accounts with argon2 password hashes
pub struct CredentialStore {
    passwords: PasswordManager,
    // Verified against for unknown emails so both paths cost the same
    dummy_hash: String,
    accounts: RwLock<HashMap<String, Account>>,
}

impl CredentialStore {
    pub fn new(passwords: PasswordManager) -> Result<Self, CredentialError> {
        let dummy_hash = passwords.hash_password("dummy_password_for_timing")?;

        Ok(Self {
            passwords,
            dummy_hash,
            accounts: RwLock::new(HashMap::new()),
        })
    }

    pub fn register(
        &self,
        email: &str,
        password: &str,
        username: Option<String>,
    ) -> Result<UserPublic, CredentialError> {
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::InvalidRequest(
                "Email and password are required".to_string(),
            ));
        }

        let password_hash = self.passwords.hash_password(password)?;
        let user = UserPublic {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            username: username
                .or_else(|| email.split('@').next().map(str::to_string)),
        };

        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if accounts.contains_key(email) {
            return Err(CredentialError::AlreadyExists(email.to_string()));
        }

        accounts.insert(
            email.to_string(),
            Account {
                password_hash,
                user: user.clone(),
            },
        );

        log::info!("Registered account {}", email);

        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, email: &str) -> Option<(String, UserPublic)> {
        self.accounts
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(email)
            .map(|account| (account.password_hash.clone(), account.user.clone()))
    }
}

impl Authenticator for CredentialStore {
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserPublic, Vec<FieldError>> {
        let account = self.lookup(email);

        // Always perform password verification
        let stored_hash = account
            .as_ref()
            .map_or(self.dummy_hash.as_str(), |(hash, _)| hash.as_str());
        let verified = self.passwords.verify_password(password, stored_hash);

        match (account, verified) {
            (_, Err(e)) => {
                log::error!("Password verification error: {}", e);
                Err(vec![FieldError::root(INTERNAL)])
            }
            (None, Ok(_)) => {
                Err(vec![FieldError::new(Field::Email, UNKNOWN_EMAIL)])
            }
            (Some(_), Ok(false)) => {
                Err(vec![FieldError::new(Field::Password, WRONG_PASSWORD)])
            }
            (Some((_, user)), Ok(true)) => Ok(user),
        }
    }
}
