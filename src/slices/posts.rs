use serde::Serialize;

use super::RequestStatus;
use crate::models::Post;

/// The post list plus the status of the latest request against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Started and completed post operations, as consumed by [`reduce`].
///
/// Create and delete have no started/failed variants: only fetch drives the
/// loading and error state of this slice, and a failed create or delete
/// leaves it untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsEvent {
    FetchStarted,
    FetchSucceeded(Vec<Post>),
    FetchFailed(Option<String>),
    CreateSucceeded(Post),
    UpdateSucceeded(Post),
    DeleteSucceeded(String),
}

/// Apply one event to the posts slice. Every mutation of [`PostsState`]
/// happens here.
pub fn reduce(state: &mut PostsState, event: PostsEvent) {
    match event {
        PostsEvent::FetchStarted => {
            state.status = RequestStatus::Loading;
        }
        PostsEvent::FetchSucceeded(posts) => {
            state.status = RequestStatus::Succeeded;
            state.posts = posts;
        }
        PostsEvent::FetchFailed(message) => {
            state.status = RequestStatus::Failed;
            state.error =
                Some(message.unwrap_or_else(|| "failed to fetch posts".to_string()));
        }
        PostsEvent::CreateSucceeded(post) => {
            state.posts.push(post);
        }
        PostsEvent::UpdateSucceeded(post) => {
            // replace in place when present; an unknown id changes nothing
            if let Some(existing) = state.posts.iter_mut().find(|p| p.id == post.id) {
                *existing = post;
            }
            state.status = RequestStatus::Succeeded;
        }
        PostsEvent::DeleteSucceeded(id) => {
            state.posts.retain(|post| post.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;
    use std::collections::BTreeMap;

    fn post(id: &str, title: &str, status: PostStatus) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("{title} content"),
            status,
            author_id: "user1".to_string(),
            author_name: "Maha".to_string(),
            created_at: None,
            updated_at: None,
            extra: BTreeMap::new(),
        }
    }

    fn seeded() -> PostsState {
        PostsState {
            posts: vec![
                post("post1", "Test Post 1", PostStatus::Published),
                post("post2", "Test Post 2", PostStatus::Draft),
            ],
            ..PostsState::default()
        }
    }

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = PostsState::default();
        assert!(state.posts.is_empty());
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fetch_start_moves_to_loading() {
        let mut state = PostsState::default();
        reduce(&mut state, PostsEvent::FetchStarted);
        assert_eq!(state.status, RequestStatus::Loading);
    }

    #[test]
    fn fetch_success_replaces_the_list_wholesale() {
        let mut state = PostsState::default();
        let posts = seeded().posts;

        reduce(&mut state, PostsEvent::FetchSucceeded(posts.clone()));
        assert_eq!(state.status, RequestStatus::Succeeded);
        assert_eq!(state.posts, posts);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fetch_failure_records_the_message() {
        let mut state = PostsState::default();
        reduce(
            &mut state,
            PostsEvent::FetchFailed(Some("Failed to fetch posts".to_string())),
        );
        assert_eq!(state.status, RequestStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch posts"));
    }

    #[test]
    fn fetch_failure_without_a_message_uses_the_fallback() {
        let mut state = PostsState::default();
        reduce(&mut state, PostsEvent::FetchFailed(None));
        assert_eq!(state.error.as_deref(), Some("failed to fetch posts"));
    }

    #[test]
    fn create_success_appends_without_touching_status() {
        let mut state = seeded();
        let new_post = post("post3", "Test Post 3", PostStatus::Draft);

        reduce(&mut state, PostsEvent::CreateSucceeded(new_post.clone()));
        assert_eq!(state.posts.len(), 3);
        assert_eq!(state.posts[2], new_post);
        assert_eq!(state.status, RequestStatus::Idle);
    }

    #[test]
    fn update_success_replaces_the_matching_post() {
        let mut state = seeded();
        let mut updated = state.posts[0].clone();
        updated.title = "Updated Title".to_string();
        updated.content = "Updated content".to_string();

        reduce(&mut state, PostsEvent::UpdateSucceeded(updated.clone()));
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[0], updated);
        assert_eq!(state.status, RequestStatus::Succeeded);
    }

    #[test]
    fn update_of_unknown_id_changes_nothing_but_status() {
        let mut state = seeded();
        let before = state.posts.clone();
        let stranger = post("non-existent-id", "Non-existent Post", PostStatus::Published);

        reduce(&mut state, PostsEvent::UpdateSucceeded(stranger));
        assert_eq!(state.posts, before);
        assert_eq!(state.status, RequestStatus::Succeeded);
    }

    #[test]
    fn delete_success_filters_out_the_id() {
        let mut state = seeded();
        reduce(&mut state, PostsEvent::DeleteSucceeded("post1".to_string()));
        assert_eq!(state.posts.len(), 1);
        assert!(state.posts.iter().all(|post| post.id != "post1"));
        assert_eq!(state.status, RequestStatus::Idle);
    }
}
