use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

use crate::errors::AppError;

/// Argon2id hasher producing PHC strings for the `users.password_hash` column.
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("CredentialHasher::hash: {:?}", e);
                AppError::PasswordHash
            })
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(Params::default())
    }
}
