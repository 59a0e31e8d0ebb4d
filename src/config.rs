//! Server settings read from the environment (and `.env` via dotenvy).
//!
//! | Variable           | Meaning                                    |
//! |--------------------|--------------------------------------------|
//! | `SIGNIN_HASH_COST` | `standard` (default) or `fast`             |
//! | `SIGNIN_ACCOUNTS`  | comma-separated `email:password` seed list |

use crate::common::{ConfigError, CredentialError};
use crate::services::{CredentialStore, HashCost, PasswordManager};

pub const HASH_COST_VAR: &str = "SIGNIN_HASH_COST";
pub const ACCOUNTS_VAR: &str = "SIGNIN_ACCOUNTS";

const DEMO_EMAIL: &str = "demo@signin.dev";
const DEMO_PASSWORD: &str = "demo";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    pub hash_cost: HashCost,
    pub accounts: Vec<SeedAccount>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            hash_cost: HashCost::default(),
            accounts: vec![SeedAccount {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            }],
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(HASH_COST_VAR) {
            settings.hash_cost = raw.parse()?;
        }

        if let Some(raw) = lookup(ACCOUNTS_VAR) {
            settings.accounts = parse_accounts(&raw)?;
        }

        Ok(settings)
    }

    /// Builds a store seeded with the configured accounts
    pub fn credential_store(&self) -> Result<CredentialStore, CredentialError> {
        let store = CredentialStore::new(PasswordManager::new(self.hash_cost)?)?;

        for account in &self.accounts {
            store.register(&account.email, &account.password, None)?;
        }

        Ok(store)
    }
}

fn parse_accounts(raw: &str) -> Result<Vec<SeedAccount>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((email, password)) if !email.is_empty() && !password.is_empty() => {
                Ok(SeedAccount {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidAccount(entry.to_string())),
        })
        .collect()
}
