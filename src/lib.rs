// ============================================================================
// POSTPULSE CORE - State and data layer of the PostPulse blog app
// ============================================================================

// - Gateway contracts for the remote post collection and identity provider
// - In-memory reference backends for tests and the demo binary
// - Pure reducer slices for posts, session and per-user stats
// - Dependency-injected application store coordinating async operations
// - Pagination windowing for the listing pages
// - Form input validation

pub mod app;
pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod slices;
pub mod store;

pub use app::AppStore;
pub use auth::{
    AuthGateway, IdentityProvider, MemoryIdentityProvider, MemorySessionCache, ProviderUser,
    SessionCache, UserRecord,
};
pub use config::AppConfig;
pub use dto::{PostInput, SignInRequest, SignUpRequest};
pub use errors::{AuthError, StoreError};
pub use models::{Post, PostData, PostStatus, Timestamp, User, UserProfile, UserStats};
pub use pagination::{
    PageItem, compute_page_items, has_next, has_previous, page_count, page_slice,
};
pub use slices::RequestStatus;
pub use store::{MemoryPostStore, PostStore};
