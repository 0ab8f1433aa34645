use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostFields, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the read and delete operations every entity shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// All entities, in ascending identifier order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` when nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Title uniqueness must be enforced by the implementation atomically with the write,
/// surfacing as `RepoError::Constraint`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Persist a new post and return it with its assigned identifier.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite the editable fields of an existing post, leaving id and date untouched.
    async fn update(&self, id: PostId, fields: PostFields) -> Result<Post, RepoError>;
}
