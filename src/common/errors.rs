use thiserror::Error;

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Invalid hashing parameters: {0}")]
    Params(#[from] argon2::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] argon2::password_hash::Error),

    #[error("Account with email '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown hash cost '{0}' (expected 'standard' or 'fast')")]
    InvalidHashCost(String),

    #[error("Invalid account entry '{0}' (expected 'email:password')")]
    InvalidAccount(String),
}
