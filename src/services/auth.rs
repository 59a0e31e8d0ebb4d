use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use std::str::FromStr;

use crate::common::{ConfigError, CredentialError};

/// Argon2id cost profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashCost {
    #[default]
    Standard,
    /// Minimal parameters, for development and tests only
    Fast,
}

impl HashCost {
    fn params(self) -> Result<Params, argon2::Error> {
        match self {
            HashCost::Standard => Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            ),
            HashCost::Fast => Params::new(Params::MIN_M_COST, 1, 1, None),
        }
    }
}

impl FromStr for HashCost {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(HashCost::Standard),
            "fast" => Ok(HashCost::Fast),
            other => Err(ConfigError::InvalidHashCost(other.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct PasswordManager {
    engine: Argon2<'static>,
}

impl PasswordManager {
    pub fn new(cost: HashCost) -> Result<Self, CredentialError> {
        let engine = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            cost.params()?,
        );

        Ok(Self { engine })
    }

    pub fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.engine.hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, CredentialError> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = self.engine.verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
