mod memory;

pub use memory::MemoryPostStore;

use std::future::Future;

use crate::errors::StoreError;
use crate::models::{Post, PostData};

/// Async interface to the remote post collection.
///
/// All reads and writes of post documents go through this trait, so the
/// same operations work against the in-memory backend used by tests and
/// the demo as against a hosted document database.
pub trait PostStore {
    /// List documents in fetch order, filtered by author when given.
    fn list(
        &self,
        author_id: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Post>, StoreError>>;

    /// Add a document; the store assigns the id and both timestamps.
    fn create(&self, data: &PostData) -> impl Future<Output = Result<Post, StoreError>>;

    /// Replace the document with the given id. The publish flag wins over
    /// whatever status the input carried, and both timestamps are restamped.
    fn update(
        &self,
        id: &str,
        data: &PostData,
    ) -> impl Future<Output = Result<Post, StoreError>>;

    /// Remove a document, returning the id that was passed in.
    fn delete(&self, id: &str) -> impl Future<Output = Result<String, StoreError>>;
}
