use std::future::Future;
use std::sync::Arc;

use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AuthError;

/// Credential record handed back by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUser {
    pub uid: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Profile document in the provider's user side-table, keyed by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Async interface to the remote identity provider, including its
/// user-record side-table.
pub trait IdentityProvider {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<ProviderUser, AuthError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<ProviderUser, AuthError>>;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;

    fn fetch_profile(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Option<UserRecord>, AuthError>>;

    fn store_profile(
        &self,
        uid: &str,
        record: &UserRecord,
    ) -> impl Future<Output = Result<(), AuthError>>;
}

/// In-memory identity provider with bcrypt-hashed credentials.
#[derive(Clone, Debug, Default)]
pub struct MemoryIdentityProvider {
    // accounts are keyed by email, profiles by uid
    accounts: Arc<DashMap<String, Account>>,
    profiles: Arc<DashMap<String, UserRecord>>,
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderUser, AuthError> {
        let account = self
            .accounts
            .get(email)
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify(password, &account.hashed_password)
            .map_err(|e| AuthError::Unavailable(format!("Password verification failed: {e}")))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(ProviderUser {
            uid: account.uid.clone(),
            email: email.to_string(),
            created_at: account.created_at,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderUser, AuthError> {
        if self.accounts.contains_key(email) {
            return Err(AuthError::EmailTaken);
        }

        let hashed_password = hash(password, DEFAULT_COST)
            .map_err(|e| AuthError::Unavailable(format!("Password hashing failed: {e}")))?;

        let account = Account {
            uid: Uuid::new_v4().to_string(),
            hashed_password,
            created_at: Utc::now(),
        };
        let user = ProviderUser {
            uid: account.uid.clone(),
            email: email.to_string(),
            created_at: account.created_at,
        };
        self.accounts.insert(email.to_string(), account);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.profiles.get(uid).map(|record| record.clone()))
    }

    async fn store_profile(&self, uid: &str, record: &UserRecord) -> Result<(), AuthError> {
        self.profiles.insert(uid.to_string(), record.clone());
        Ok(())
    }
}
