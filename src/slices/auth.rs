use serde::Serialize;

use super::RequestStatus;
use crate::models::User;

const FALLBACK_ERROR: &str = "Something went wrong";

/// The session user plus the status of the latest auth request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state with the user restored from the session cache.
    pub fn restored(user: Option<User>) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }
}

/// Auth intents and operation outcomes, as consumed by [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// Result of an explicit session-cache re-read; leaves status alone.
    SessionChecked(Option<User>),
    UserSet(Option<User>),
    UserCleared,
    SignInStarted,
    SignInSucceeded(User),
    SignInFailed(Option<String>),
    SignUpStarted,
    SignUpSucceeded(User),
    SignUpFailed(Option<String>),
    SignOutStarted,
    SignOutSucceeded,
    SignOutFailed(Option<String>),
}

/// Apply one event to the auth slice.
///
/// A failed sign-out keeps the user signed in locally; only a successful
/// one clears the session.
pub fn reduce(state: &mut AuthState, event: AuthEvent) {
    match event {
        AuthEvent::SessionChecked(user) => {
            state.user = user;
        }
        AuthEvent::UserSet(user) => {
            state.user = user;
            state.status = RequestStatus::Succeeded;
            state.error = None;
        }
        AuthEvent::UserCleared => {
            state.user = None;
            state.status = RequestStatus::Idle;
            state.error = None;
        }
        AuthEvent::SignInStarted | AuthEvent::SignUpStarted | AuthEvent::SignOutStarted => {
            state.status = RequestStatus::Loading;
            state.error = None;
        }
        AuthEvent::SignInSucceeded(user) | AuthEvent::SignUpSucceeded(user) => {
            state.status = RequestStatus::Succeeded;
            state.user = Some(user);
        }
        AuthEvent::SignOutSucceeded => {
            state.status = RequestStatus::Idle;
            state.user = None;
        }
        AuthEvent::SignInFailed(message)
        | AuthEvent::SignUpFailed(message)
        | AuthEvent::SignOutFailed(message) => {
            state.status = RequestStatus::Failed;
            state.error = Some(message.unwrap_or_else(|| FALLBACK_ERROR.to_string()));
        }
    }
}
