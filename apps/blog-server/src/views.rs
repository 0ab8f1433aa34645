//! Page templates and the view models they render.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder};
use askama::Template;

use inkpot_core::domain::{Post, PostFields};
use inkpot_core::validation::{POST_FIELD_RULES, Rule, ValidationErrors};
use inkpot_shared::ErrorResponse;

use crate::middleware::error::{AppError, AppResult};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: Post,
    /// Sanitized body, safe to emit unescaped.
    pub body_html: String,
}

impl PostTemplate {
    pub fn new(post: Post) -> Self {
        let body_html = ammonia::clean(&post.body);
        Self { post, body_html }
    }
}

/// One input of the post form.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub errors: Vec<String>,
    pub required: bool,
    /// Rendered as the rich-text editor.
    pub rich_text: bool,
}

#[derive(Template)]
#[template(path = "make-post.html")]
pub struct MakePostTemplate {
    pub heading: &'static str,
    pub action: String,
    pub fields: Vec<FieldView>,
    pub form_errors: Vec<String>,
    pub csrf_field: &'static str,
    pub csrf_token: String,
}

impl MakePostTemplate {
    /// Lay out one input per entry of the validation rule table.
    pub fn new(
        heading: &'static str,
        action: String,
        values: &PostFields,
        errors: &ValidationErrors,
    ) -> Self {
        let fields = POST_FIELD_RULES
            .iter()
            .map(|rules| FieldView {
                name: rules.name,
                label: rules.label,
                value: (rules.value)(values).to_string(),
                errors: errors.get(rules.name).to_vec(),
                required: rules.rules.contains(&Rule::Required),
                rich_text: rules.name == "body",
            })
            .collect();

        Self {
            heading,
            action,
            fields,
            form_errors: Vec::new(),
            csrf_field: crate::csrf::CSRF_FIELD,
            csrf_token: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub request_id: String,
}

impl From<&ErrorResponse> for ErrorTemplate {
    fn from(error: &ErrorResponse) -> Self {
        Self {
            status: error.status,
            title: error.title.clone(),
            detail: error.detail.clone().unwrap_or_default(),
            request_id: error.request_id.clone().unwrap_or_default(),
        }
    }
}

/// Render `template` into an HTML response with `status`.
pub fn render<T: Template>(status: StatusCode, template: &T) -> AppResult<HttpResponse> {
    render_with(HttpResponse::build(status), template)
}

/// Render `template` into a response started by `builder` (e.g. one that sets cookies).
pub fn render_with<T: Template>(
    mut builder: HttpResponseBuilder,
    template: &T,
) -> AppResult<HttpResponse> {
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {e}")))?;

    Ok(builder.content_type(ContentType::html()).body(html))
}
