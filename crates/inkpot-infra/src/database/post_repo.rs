//! SeaORM post repository, shared by the Postgres and SQLite backends.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

use inkpot_core::domain::{NewPost, Post, PostFields, PostId};
use inkpot_core::error::RepoError;
use inkpot_core::ports::PostRepository;

use super::base::{SeaOrmBaseRepository, repo_error};
use super::entity::post::{self, Entity as PostEntity};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(title = %post.fields.title, "Inserting post");

        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(repo_error)?;

        Ok(model.into())
    }

    async fn update(&self, id: PostId, fields: PostFields) -> Result<Post, RepoError> {
        tracing::debug!(post_id = id, "Updating post");

        // `date` stays NotSet so the UPDATE never touches it.
        let active = post::ActiveModel {
            id: Set(id),
            title: Set(fields.title),
            subtitle: Set(fields.subtitle),
            date: NotSet,
            body: Set(fields.body),
            author: Set(fields.author),
            img_url: Set(fields.img_url),
        };
        let model = active.update(&self.db).await.map_err(repo_error)?;

        Ok(model.into())
    }
}
