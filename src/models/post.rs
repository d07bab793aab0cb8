use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Publication state of a post document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
}

impl PostStatus {
    /// Resolve the editor's publish checkbox into a status.
    pub fn from_publish(publish: bool) -> Self {
        if publish {
            PostStatus::Published
        } else {
            PostStatus::Draft
        }
    }
}

/// Server-assigned timestamp pair, opaque to the slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanoseconds: now.timestamp_subsec_nanos(),
        }
    }
}

/// A post document as returned by the remote collection.
///
/// Unknown document fields survive round trips in `extra` instead of being
/// dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub author_id: String,
    pub author_name: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Input record for creating or replacing a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub publish: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
