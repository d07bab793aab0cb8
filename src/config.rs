use std::env;

/// Runtime knobs, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key the serialized session user is stored under in the local cache.
    pub session_cache_key: String,
    /// Page size used by the post listing.
    pub posts_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_cache_key: "user".to_string(),
            posts_per_page: 6,
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            session_cache_key: env::var("SESSION_CACHE_KEY")
                .unwrap_or(defaults.session_cache_key),
            posts_per_page: env::var("POSTS_PER_PAGE")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.posts_per_page),
        }
    }
}
