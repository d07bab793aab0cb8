pub mod auth;
pub mod posts;
pub mod user;

use serde::{Deserialize, Serialize};

/// Lifecycle of the most recent request issued against a slice. Governs
/// whether a fetch is triggered and whether the UI shows loading/error
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}
