use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Post, PostStatus};

/// The signed-in user as held by the auth slice and the session cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl User {
    /// Display name, falling back to the email local part.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => email_local_part(&self.email),
        }
    }
}

/// Everything before the `@`, used whenever a user never set a name.
pub(crate) fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Profile card projection of a [`User`] for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.uid.clone(),
            name: user.display_name().to_string(),
            email: user.email.clone(),
            join_date: user.created_at.format("%-m/%-d/%Y").to_string(),
        }
    }
}

/// Derived counters shown on the dashboard. Not persisted remotely; the
/// caller recomputes them whenever the post list changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
}

impl UserStats {
    /// Count totals over one author's post list.
    pub fn from_posts(posts: &[Post]) -> Self {
        let published_posts = posts
            .iter()
            .filter(|post| post.status == PostStatus::Published)
            .count();
        let draft_posts = posts
            .iter()
            .filter(|post| post.status == PostStatus::Draft)
            .count();

        Self {
            total_posts: posts.len(),
            published_posts,
            draft_posts,
        }
    }
}
