use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use uuid::Uuid;

use super::PostStore;
use crate::errors::StoreError;
use crate::models::{Post, PostData, PostStatus, Timestamp};

/// In-memory post collection for tests and the demo binary.
#[derive(Clone, Debug, Default)]
pub struct MemoryPostStore {
    documents: Arc<DashMap<String, Post>>,
    // insertion order doubles as the remote fetch order
    order: Arc<Mutex<Vec<String>>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl PostStore for MemoryPostStore {
    async fn list(&self, author_id: Option<&str>) -> Result<Vec<Post>, StoreError> {
        let order = self.order.lock().unwrap().clone();
        let mut posts = Vec::new();
        for id in order {
            if let Some(doc) = self.documents.get(&id) {
                if author_id.is_none_or(|owner| doc.author_id == owner) {
                    posts.push(doc.clone());
                }
            }
        }
        Ok(posts)
    }

    async fn create(&self, data: &PostData) -> Result<Post, StoreError> {
        let now = Timestamp::now();
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: data.title.clone(),
            content: data.content.clone(),
            status: data.status.unwrap_or(PostStatus::Draft),
            author_id: data.author_id.clone(),
            author_name: data.author_name.clone(),
            created_at: Some(now),
            updated_at: Some(now),
            extra: data.extra.clone(),
        };

        self.order.lock().unwrap().push(post.id.clone());
        self.documents.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, data: &PostData) -> Result<Post, StoreError> {
        let mut entry = self
            .documents
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // full replace: creation time is restamped along with the update time
        let now = Timestamp::now();
        let post = Post {
            id: id.to_string(),
            title: data.title.clone(),
            content: data.content.clone(),
            status: PostStatus::from_publish(data.publish),
            author_id: data.author_id.clone(),
            author_name: data.author_name.clone(),
            created_at: Some(now),
            updated_at: Some(now),
            extra: data.extra.clone(),
        };

        *entry = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<String, StoreError> {
        // deleting an absent id succeeds, like the hosted collection
        if self.documents.remove(id).is_some() {
            self.order.lock().unwrap().retain(|existing| existing != id);
        }
        Ok(id.to_string())
    }
}
