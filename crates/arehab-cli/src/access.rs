use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("credentials required: set AREHAB_USER and AREHAB_PASSWORD")]
    Missing,

    #[error("access denied for user '{0}'")]
    Denied(String),
}

/// Username and salted SHA-256 (hex) of the password guarding the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCredentials {
    pub username: String,
    /// Random hex salt generated when the password is set. Empty for
    /// credentials written before salting.
    #[serde(default)]
    pub salt: String,
    pub password_sha256: String,
}

impl AccessCredentials {
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        let salt = new_salt();
        Self {
            username: username.into(),
            password_sha256: hash_password(&salt, password),
            salt,
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<(), AccessError> {
        let user_ok = self.username == username;
        let password_ok =
            digests_match(&self.password_sha256, &hash_password(&self.salt, password));
        if user_ok && password_ok {
            Ok(())
        } else {
            Err(AccessError::Denied(username.to_string()))
        }
    }
}

/// Gate a command. With no credentials configured the tool is open.
pub fn check_access(
    credentials: Option<&AccessCredentials>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(), AccessError> {
    let Some(credentials) = credentials else {
        return Ok(());
    };
    let (Some(username), Some(password)) = (username, password) else {
        return Err(AccessError::Missing);
    };

    credentials.verify(username, password).inspect_err(|_| {
        tracing::warn!(user = %username, "access denied");
    })
}

/// SHA-256 of `salt` followed by `password`, as lowercase hex.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

/// 16 random bytes as hex.
pub fn new_salt() -> String {
    to_hex(&rand::random::<[u8; 16]>())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compare two hex digests without short-circuiting on the first mismatch.
fn digests_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
