//! The post store - the only owner of post records.
//!
//! Wraps a [`PostRepository`] with the domain contract: input is validated before any
//! write, new posts are stamped with today's date, and repository failures are mapped to
//! [`DomainError`]s the handler layer can act on.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostFields, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, PostRepository};
use crate::validation::validate_post;

#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Every post, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(storage_error)
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Validate `fields`, stamp today's date and persist a new post.
    pub async fn create(&self, fields: PostFields) -> Result<Post, DomainError> {
        let fields = fields.trimmed();
        validate_post(&fields).map_err(DomainError::Validation)?;

        let title = fields.title.clone();
        let post = NewPost::new(fields, self.clock.today());

        let created = self.repo.insert(post).await.map_err(|e| match e {
            RepoError::Constraint(detail) => {
                tracing::debug!(%detail, "Rejected post with duplicate title");
                DomainError::Duplicate { title }
            }
            other => storage_error(other),
        })?;

        tracing::info!(post_id = created.id, title = %created.title, "Post created");
        Ok(created)
    }

    /// Validate `fields` and overwrite the editable fields of post `id`.
    ///
    /// The identifier and publication date are never changed.
    pub async fn update(&self, id: PostId, fields: PostFields) -> Result<Post, DomainError> {
        let fields = fields.trimmed();
        validate_post(&fields).map_err(DomainError::Validation)?;

        let title = fields.title.clone();
        let updated = self.repo.update(id, fields).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            RepoError::Constraint(_) => DomainError::Duplicate { title },
            other => storage_error(other),
        })?;

        tracing::info!(post_id = id, "Post updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => storage_error(other),
        })?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

fn storage_error(err: RepoError) -> DomainError {
    tracing::error!(error = %err, "Post repository failure");
    DomainError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::ports::BaseRepository;

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        }
    }

    /// Records writes and answers with canned results.
    #[derive(Default)]
    struct RecordingRepo {
        inserted: Mutex<Vec<NewPost>>,
        reject_insert: bool,
    }

    #[async_trait]
    impl BaseRepository<Post, PostId> for RecordingRepo {
        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
            Ok(None)
        }

        async fn delete(&self, _id: PostId) -> Result<(), RepoError> {
            Err(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl PostRepository for RecordingRepo {
        async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
            if self.reject_insert {
                return Err(RepoError::Constraint("blog_post.title".to_string()));
            }
            self.inserted.lock().unwrap().push(post.clone());
            let f = post.fields;
            Ok(Post {
                id: 1,
                title: f.title,
                subtitle: f.subtitle,
                date: post.date,
                body: f.body,
                author: f.author,
                img_url: f.img_url,
            })
        }

        async fn update(&self, _id: PostId, _fields: PostFields) -> Result<Post, RepoError> {
            Err(RepoError::NotFound)
        }
    }

    fn store(repo: Arc<RecordingRepo>) -> PostStore {
        PostStore::new(repo, Arc::new(FixedClock))
    }

    fn fields(img_url: &str) -> PostFields {
        PostFields {
            title: " Hello ".to_string(),
            subtitle: "World".to_string(),
            author: "A".to_string(),
            img_url: img_url.to_string(),
            body: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_date_and_trims() {
        let repo = Arc::new(RecordingRepo::default());
        let post = store(repo.clone())
            .create(fields("http://x.test/i.png"))
            .await
            .unwrap();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, "17 October 2026");
        assert_eq!(repo.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_repository() {
        let repo = Arc::new(RecordingRepo::default());
        let err = store(repo.clone())
            .create(fields("not a url"))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.get("img_url"), ["Invalid URL."]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_constraint_maps_to_duplicate() {
        let repo = Arc::new(RecordingRepo {
            reject_insert: true,
            ..Default::default()
        });
        let err = store(repo)
            .create(fields("http://x.test/i.png"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Duplicate { ref title } if title == "Hello"));
    }

    #[tokio::test]
    async fn test_missing_post_maps_to_not_found() {
        let store = store(Arc::new(RecordingRepo::default()));

        assert!(matches!(
            store.get_by_id(7).await,
            Err(DomainError::NotFound { id: 7, .. })
        ));
        assert!(matches!(
            store.delete(7).await,
            Err(DomainError::NotFound { id: 7, .. })
        ));
        assert!(matches!(
            store.update(7, fields("http://x.test/i.png")).await,
            Err(DomainError::NotFound { id: 7, .. })
        ));
    }
}
