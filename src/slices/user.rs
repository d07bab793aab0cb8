use serde::Serialize;

use super::RequestStatus;
use crate::models::{User, UserStats};

/// Per-user view state: the profile shown on the dashboard and the derived
/// post counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserState {
    pub current_user: Option<User>,
    pub user_stats: UserStats,
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Intents consumed by [`reduce`]. Aggregation does not live here: callers
/// compute [`UserStats`] from the current post list and dispatch it in.
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    CurrentUserSet(Option<User>),
    StatsUpdated(UserStats),
}

pub fn reduce(state: &mut UserState, event: UserEvent) {
    match event {
        UserEvent::CurrentUserSet(user) => {
            state.current_user = user;
        }
        UserEvent::StatsUpdated(stats) => {
            state.user_stats = stats;
        }
    }
}
