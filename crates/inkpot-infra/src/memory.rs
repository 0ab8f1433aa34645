//! In-memory post repository - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inkpot_core::domain::{NewPost, Post, PostFields, PostId};
use inkpot_core::error::RepoError;
use inkpot_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct MemoryState {
    posts: BTreeMap<PostId, Post>,
    last_id: PostId,
}

impl MemoryState {
    fn title_taken(&self, title: &str, except: Option<PostId>) -> bool {
        self.posts
            .values()
            .any(|p| p.title == title && Some(p.id) != except)
    }
}

/// In-memory post repository using a `BTreeMap` behind an async `RwLock`.
///
/// Uniqueness checks and writes happen under the same write lock.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        state.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        if state.title_taken(&post.fields.title, None) {
            return Err(RepoError::Constraint("blog_post.title".to_string()));
        }

        state.last_id += 1;
        let fields = post.fields;
        let stored = Post {
            id: state.last_id,
            title: fields.title,
            subtitle: fields.subtitle,
            date: post.date,
            body: fields.body,
            author: fields.author,
            img_url: fields.img_url,
        };
        state.posts.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: PostId, fields: PostFields) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        if !state.posts.contains_key(&id) {
            return Err(RepoError::NotFound);
        }
        if state.title_taken(&fields.title, Some(id)) {
            return Err(RepoError::Constraint("blog_post.title".to_string()));
        }

        let post = state.posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.title = fields.title;
        post.subtitle = fields.subtitle;
        post.body = fields.body;
        post.author = fields.author;
        post.img_url = fields.img_url;

        Ok(post.clone())
    }
}
