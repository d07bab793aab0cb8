use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::auth::{AuthGateway, IdentityProvider, SessionCache};
use crate::dto::SignUpRequest;
use crate::errors::{AuthError, StoreError};
use crate::models::{Post, PostData, User, UserStats};
use crate::slices::auth::{self as auth_slice, AuthEvent, AuthState};
use crate::slices::posts::{self as posts_slice, PostsEvent, PostsState};
use crate::slices::user::{self as user_slice, UserEvent, UserState};
use crate::store::PostStore;

/// Application state container.
///
/// Owns the three slices and the injected gateways. Every state transition
/// goes through a slice reducer while a per-slice lock serializes dispatch,
/// so concurrent operations' completions are applied in completion order.
///
/// Each asynchronous operation takes an optional [`CancellationToken`]; a
/// token cancelled while the gateway call was in flight turns the
/// completion into a no-op (the slices stay untouched), though the call
/// itself is never aborted mid-I/O.
pub struct AppStore<S, P, C> {
    posts_state: Mutex<PostsState>,
    auth_state: Mutex<AuthState>,
    user_state: Mutex<UserState>,
    post_store: S,
    auth_gateway: AuthGateway<P, C>,
}

impl<S, P, C> AppStore<S, P, C>
where
    S: PostStore,
    P: IdentityProvider,
    C: SessionCache,
{
    /// Build a store. The auth slice starts with whatever user the session
    /// cache still holds.
    pub fn new(post_store: S, auth_gateway: AuthGateway<P, C>) -> Self {
        let restored = auth_gateway.restore_session();
        Self {
            posts_state: Mutex::new(PostsState::default()),
            auth_state: Mutex::new(AuthState::restored(restored)),
            user_state: Mutex::new(UserState::default()),
            post_store,
            auth_gateway,
        }
    }

    // ------------------------------------------------------------------
    // Snapshots (the read-only surface for the UI layer)
    // ------------------------------------------------------------------

    pub fn posts(&self) -> PostsState {
        self.posts_state.lock().unwrap().clone()
    }

    pub fn auth(&self) -> AuthState {
        self.auth_state.lock().unwrap().clone()
    }

    pub fn user(&self) -> UserState {
        self.user_state.lock().unwrap().clone()
    }

    fn dispatch_posts(&self, event: PostsEvent) {
        posts_slice::reduce(&mut self.posts_state.lock().unwrap(), event);
    }

    fn dispatch_auth(&self, event: AuthEvent) {
        auth_slice::reduce(&mut self.auth_state.lock().unwrap(), event);
    }

    fn dispatch_user(&self, event: UserEvent) {
        user_slice::reduce(&mut self.user_state.lock().unwrap(), event);
    }

    // ------------------------------------------------------------------
    // Post operations
    // ------------------------------------------------------------------

    /// Fetch posts, optionally only one author's, and replace the list.
    pub async fn fetch_posts(
        &self,
        author_id: Option<&str>,
        cancel: Option<CancellationToken>,
    ) -> Result<Vec<Post>, StoreError> {
        self.dispatch_posts(PostsEvent::FetchStarted);

        let result = self.post_store.list(author_id).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(posts) => self.dispatch_posts(PostsEvent::FetchSucceeded(posts.clone())),
            Err(err) => {
                error!("Error fetching posts: {err}");
                self.dispatch_posts(PostsEvent::FetchFailed(Some(err.to_string())));
            }
        }
        result
    }

    /// Create a post and append it to the list.
    pub async fn create_post(
        &self,
        data: PostData,
        cancel: Option<CancellationToken>,
    ) -> Result<Post, StoreError> {
        let result = self.post_store.create(&data).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(post) => self.dispatch_posts(PostsEvent::CreateSucceeded(post.clone())),
            // a failed create leaves the slice untouched
            Err(err) => error!("Error creating post: {err}"),
        }
        result
    }

    /// Replace a post by id; the gateway resolves its publish status.
    pub async fn update_post(
        &self,
        id: &str,
        data: PostData,
        cancel: Option<CancellationToken>,
    ) -> Result<Post, StoreError> {
        let result = self.post_store.update(id, &data).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(post) => self.dispatch_posts(PostsEvent::UpdateSucceeded(post.clone())),
            Err(err) => error!("Error updating post: {err}"),
        }
        result
    }

    /// Delete a post by id and drop it from the list.
    pub async fn delete_post(
        &self,
        id: &str,
        cancel: Option<CancellationToken>,
    ) -> Result<String, StoreError> {
        let result = self.post_store.delete(id).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(deleted) => self.dispatch_posts(PostsEvent::DeleteSucceeded(deleted.clone())),
            Err(err) => error!("Error deleting post: {err}"),
        }
        result
    }

    // ------------------------------------------------------------------
    // Auth operations
    // ------------------------------------------------------------------

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        cancel: Option<CancellationToken>,
    ) -> Result<User, AuthError> {
        self.dispatch_auth(AuthEvent::SignInStarted);

        let result = self.auth_gateway.sign_in(email, password).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(user) => self.dispatch_auth(AuthEvent::SignInSucceeded(user.clone())),
            Err(err) => {
                error!("Error signing in: {err}");
                self.dispatch_auth(AuthEvent::SignInFailed(Some(err.to_string())));
            }
        }
        result
    }

    pub async fn sign_up(
        &self,
        data: SignUpRequest,
        cancel: Option<CancellationToken>,
    ) -> Result<User, AuthError> {
        self.dispatch_auth(AuthEvent::SignUpStarted);

        let result = self.auth_gateway.sign_up(data).await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(user) => self.dispatch_auth(AuthEvent::SignUpSucceeded(user.clone())),
            Err(err) => {
                error!("Error signing up: {err}");
                self.dispatch_auth(AuthEvent::SignUpFailed(Some(err.to_string())));
            }
        }
        result
    }

    pub async fn sign_out(&self, cancel: Option<CancellationToken>) -> Result<(), AuthError> {
        self.dispatch_auth(AuthEvent::SignOutStarted);

        let result = self.auth_gateway.sign_out().await;
        if is_cancelled(&cancel) {
            return result;
        }

        match &result {
            Ok(()) => self.dispatch_auth(AuthEvent::SignOutSucceeded),
            Err(err) => {
                error!("Error signing out: {err}");
                self.dispatch_auth(AuthEvent::SignOutFailed(Some(err.to_string())));
            }
        }
        result
    }

    // ------------------------------------------------------------------
    // Synchronous intents
    // ------------------------------------------------------------------

    /// Re-read the session cache into the auth slice.
    pub fn check_auth_state(&self) {
        let user = self.auth_gateway.restore_session();
        self.dispatch_auth(AuthEvent::SessionChecked(user));
    }

    pub fn set_user(&self, user: Option<User>) {
        self.dispatch_auth(AuthEvent::UserSet(user));
    }

    pub fn clear_user(&self) {
        self.dispatch_auth(AuthEvent::UserCleared);
    }

    pub fn set_current_user(&self, user: Option<User>) {
        self.dispatch_user(UserEvent::CurrentUserSet(user));
    }

    pub fn update_user_stats(&self, stats: UserStats) {
        self.dispatch_user(UserEvent::StatsUpdated(stats));
    }

    /// Recompute the stats from the current post list. Skips the dispatch
    /// when the list is empty, so the previous numbers survive a cleared
    /// list.
    pub fn refresh_user_stats(&self) {
        let posts = self.posts_state.lock().unwrap().posts.clone();
        if posts.is_empty() {
            return;
        }
        self.dispatch_user(UserEvent::StatsUpdated(UserStats::from_posts(&posts)));
    }
}

fn is_cancelled(cancel: &Option<CancellationToken>) -> bool {
    cancel
        .as_ref()
        .is_some_and(CancellationToken::is_cancelled)
}
