//! Blog post entity for SeaORM.
//!
//! Table and column names match databases created by earlier deployments of the blog.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author: String,
    pub img_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for inkpot_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            date: model.date,
            body: model.body,
            author: model.author,
            img_url: model.img_url,
        }
    }
}

/// Conversion from a Domain NewPost to SeaORM ActiveModel; the id is left to the database.
impl From<inkpot_core::domain::NewPost> for ActiveModel {
    fn from(post: inkpot_core::domain::NewPost) -> Self {
        let fields = post.fields;
        Self {
            id: NotSet,
            title: Set(fields.title),
            subtitle: Set(fields.subtitle),
            date: Set(post.date),
            body: Set(fields.body),
            author: Set(fields.author),
            img_url: Set(fields.img_url),
        }
    }
}
