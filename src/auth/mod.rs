mod provider;
mod session;

pub use provider::{IdentityProvider, MemoryIdentityProvider, ProviderUser, UserRecord};
pub use session::{MemorySessionCache, SessionCache};

use std::collections::BTreeMap;

use tracing::info;

use crate::dto::SignUpRequest;
use crate::errors::AuthError;
use crate::models::{User, email_local_part};

/// Front door for everything identity-related: wraps the remote provider
/// and keeps the local session cache in sync with it.
pub struct AuthGateway<P, C> {
    provider: P,
    cache: C,
}

impl<P: IdentityProvider, C: SessionCache> AuthGateway<P, C> {
    pub fn new(provider: P, cache: C) -> Self {
        Self { provider, cache }
    }

    /// Sign an existing user in and remember the session locally.
    ///
    /// The display name comes from the profile side-table; a user without a
    /// profile record falls back to the email local part.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let credential = self.provider.sign_in(email, password).await?;
        let profile = self.provider.fetch_profile(&credential.uid).await?;

        let name = match profile {
            Some(record) => record.name,
            None => email_local_part(&credential.email).to_string(),
        };
        let user = User {
            uid: credential.uid,
            name: Some(name),
            email: credential.email,
            created_at: credential.created_at,
            extra: BTreeMap::new(),
        };

        self.cache.store(&user);
        info!("User signed in: {}", user.email);
        Ok(user)
    }

    /// Register a new account, write its profile record, and remember the
    /// session locally.
    pub async fn sign_up(&self, data: SignUpRequest) -> Result<User, AuthError> {
        // checked before any provider call
        if data.password != data.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let credential = self.provider.sign_up(&data.email, &data.password).await?;

        let name = if data.name.is_empty() {
            email_local_part(&data.email).to_string()
        } else {
            data.name
        };
        let record = UserRecord {
            name,
            email: data.email,
            created_at: credential.created_at,
        };
        self.provider.store_profile(&credential.uid, &record).await?;

        let user = User {
            uid: credential.uid,
            name: Some(record.name),
            email: record.email,
            created_at: record.created_at,
            extra: BTreeMap::new(),
        };

        self.cache.store(&user);
        info!("New user registered: {}", user.email);
        Ok(user)
    }

    /// Sign out remotely, then forget the local session. A provider failure
    /// leaves the cached session untouched.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.cache.clear();
        Ok(())
    }

    /// Read the locally cached session. Never touches the provider.
    pub fn restore_session(&self) -> Option<User> {
        self.cache.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> AuthGateway<MemoryIdentityProvider, MemorySessionCache> {
        AuthGateway::new(
            MemoryIdentityProvider::new(),
            MemorySessionCache::default(),
        )
    }

    fn signup(name: &str, email: &str) -> SignUpRequest {
        SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_caches_the_session_and_writes_the_profile() {
        let gateway = gateway();

        let user = gateway
            .sign_up(signup("New User", "newuser@example.com"))
            .await
            .unwrap();
        assert_eq!(user.name.as_deref(), Some("New User"));
        assert_eq!(user.email, "newuser@example.com");

        assert_eq!(gateway.restore_session(), Some(user.clone()));
        assert_eq!(
            gateway
                .provider
                .fetch_profile(&user.uid)
                .await
                .unwrap()
                .unwrap()
                .name,
            "New User"
        );
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_provider() {
        let gateway = gateway();

        let mut data = signup("Test User", "test@example.com");
        data.confirm_password = "different-password".to_string();

        let result = gateway.sign_up(data).await;
        assert_eq!(result, Err(AuthError::PasswordMismatch));
        assert_eq!(gateway.provider.account_count(), 0);
        assert!(gateway.restore_session().is_none());
    }

    #[tokio::test]
    async fn sign_in_uses_the_profile_name() {
        let gateway = gateway();
        gateway
            .sign_up(signup("Test User", "test@example.com"))
            .await
            .unwrap();

        let user = gateway
            .sign_in("test@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.name.as_deref(), Some("Test User"));
    }

    #[tokio::test]
    async fn sign_in_without_a_profile_falls_back_to_the_email_local_part() {
        let provider = MemoryIdentityProvider::new();
        provider
            .sign_up("orphan@example.com", "password123")
            .await
            .unwrap();
        let gateway = AuthGateway::new(provider, MemorySessionCache::default());

        let user = gateway
            .sign_in("orphan@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.name.as_deref(), Some("orphan"));
    }

    #[tokio::test]
    async fn sign_out_clears_the_cached_session() {
        let gateway = gateway();
        gateway
            .sign_up(signup("Test User", "test@example.com"))
            .await
            .unwrap();
        assert!(gateway.restore_session().is_some());

        gateway.sign_out().await.unwrap();
        assert!(gateway.restore_session().is_none());
    }

    #[tokio::test]
    async fn blank_signup_name_falls_back_to_the_email_local_part() {
        let gateway = gateway();
        let user = gateway
            .sign_up(signup("", "noname@example.com"))
            .await
            .unwrap();
        assert_eq!(user.name.as_deref(), Some("noname"));
    }
}
