use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::models::User;

/// Synchronous local persistence for the signed-in user.
///
/// One fixed key holds one serialized [`User`]. Reads happen at store
/// construction and on explicit session checks; writes are side effects of
/// successful sign-in/sign-up/sign-out only.
pub trait SessionCache: Send + Sync {
    fn load(&self) -> Option<User>;
    fn store(&self, user: &User);
    fn clear(&self);
}

/// In-memory [`SessionCache`] used by tests and the demo binary.
#[derive(Clone, Debug)]
pub struct MemorySessionCache {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::default(),
        }
    }
}

impl Default for MemorySessionCache {
    fn default() -> Self {
        Self::new("user")
    }
}

impl SessionCache for MemorySessionCache {
    fn load(&self) -> Option<User> {
        let entries = self.entries.lock().unwrap();
        let raw = entries.get(&self.key)?;
        match serde_json::from_str(raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Discarding unreadable session entry: {err}");
                None
            }
        }
    }

    fn store(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                self.entries.lock().unwrap().insert(self.key.clone(), raw);
            }
            Err(err) => warn!("Failed to serialize session user: {err}"),
        }
    }

    fn clear(&self) {
        self.entries.lock().unwrap().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn user() -> User {
        User {
            uid: "123".to_string(),
            name: Some("Test User".to_string()),
            email: "test@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn round_trips_the_session_user() {
        let cache = MemorySessionCache::default();
        assert!(cache.load().is_none());

        cache.store(&user());
        assert_eq!(cache.load(), Some(user()));

        cache.clear();
        assert!(cache.load().is_none());
    }

    #[test]
    fn unreadable_entries_are_treated_as_signed_out() {
        let cache = MemorySessionCache::new("user");
        cache
            .entries
            .lock()
            .unwrap()
            .insert("user".to_string(), "{not json".to_string());
        assert!(cache.load().is_none());
    }
}
