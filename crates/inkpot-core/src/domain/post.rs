use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a post is created.
pub type PostId = i32;

/// Format of the stored publication date, e.g. `17 October 2026`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Post entity - a single blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub subtitle: String,
    /// Publication date, fixed when the post is created.
    pub date: String,
    /// Rich text (HTML) produced by the editor.
    pub body: String,
    pub author: String,
    pub img_url: String,
}

impl Post {
    /// The caller-editable part of this post.
    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
            img_url: self.img_url.clone(),
            body: self.body.clone(),
        }
    }
}

/// Fields supplied by the caller on create and edit.
///
/// Identifier and date are never part of this set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
}

impl PostFields {
    /// Strip surrounding whitespace from the single-line fields.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            author: self.author.trim().to_string(),
            img_url: self.img_url.trim().to_string(),
            body: self.body,
        }
    }
}

/// A validated post waiting for the repository to assign its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub fields: PostFields,
    pub date: String,
}

impl NewPost {
    pub fn new(fields: PostFields, published_on: NaiveDate) -> Self {
        Self {
            fields,
            date: format_publication_date(published_on),
        }
    }
}

pub fn format_publication_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
