//! Credential Store
//! Mission: Hold the seeded demo account and verify submitted credentials

use crate::auth::models::Account;
use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::info;

/// In-memory credential store seeded with a single demo account.
///
/// Immutable after construction; the only lookup is by exact email match.
pub struct CredentialStore {
    accounts: Vec<Account>,
}

impl CredentialStore {
    /// Seed the store with one account, hashing the plaintext at seed time.
    pub fn seeded(email: &str, password: &str) -> Result<Self> {
        let password_hash = hash(password, DEFAULT_COST).context("Failed to hash password")?;

        info!("🔐 Seeded demo account: {}", email);

        Ok(Self {
            accounts: vec![Account {
                email: email.to_string(),
                password_hash,
            }],
        })
    }

    /// Verify an email/password pair against the seeded account.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller:
    /// both return `Ok(false)`.
    pub fn verify_password(&self, email: &str, password: &str) -> Result<bool> {
        match self.accounts.iter().find(|a| a.email == email) {
            Some(account) => {
                let valid =
                    verify(password, &account.password_hash).context("Failed to verify password")?;
                Ok(valid)
            }
            None => Ok(false),
        }
    }
}
