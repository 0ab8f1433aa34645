//! Post handlers: list, show, create, edit and delete.
//!
//! Write handlers check the CSRF token, then evaluate the field rule table, and only
//! reach the post store with input that passed both. A rejected submission re-renders
//! the same form with per-field messages.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};

use inkpot_core::DomainError;
use inkpot_core::domain::{PostFields, PostId};
use inkpot_core::validation::{ValidationErrors, validate_post};
use inkpot_shared::PostForm;

use crate::csrf;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, IndexTemplate, MakePostTemplate, PostTemplate};

pub const DUPLICATE_TITLE_MESSAGE: &str = "A post with this title already exists.";

/// Which form is being shown: creating a post or editing post `id`.
#[derive(Debug, Clone, Copy)]
enum FormPage {
    Create,
    Edit(PostId),
}

impl FormPage {
    fn heading(self) -> &'static str {
        match self {
            FormPage::Create => "Create New Post",
            FormPage::Edit(_) => "Edit Post",
        }
    }

    fn action(self) -> String {
        match self {
            FormPage::Create => "/new-post".to_string(),
            FormPage::Edit(id) => format!("/edit-post/{id}"),
        }
    }
}

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    views::render(StatusCode::OK, &IndexTemplate { posts })
}

/// GET /post/{post_id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(post_id(path)?).await?;
    views::render(StatusCode::OK, &PostTemplate::new(post))
}

/// GET /new-post
pub async fn new_post_form(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    render_form(
        &req,
        &state,
        FormPage::Create,
        &PostFields::default(),
        &ValidationErrors::new(),
        None,
    )
}

/// POST /new-post
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let page = FormPage::Create;
    let fields = match checked_fields(&req, &state, page, form.into_inner())? {
        Ok(fields) => fields,
        Err(rejection) => return Ok(rejection),
    };

    match state.posts.create(fields.clone()).await {
        Ok(_) => Ok(redirect("/")),
        Err(err) => reject(&req, &state, page, &fields, err),
    }
}

/// GET /edit-post/{post_id}
pub async fn edit_post_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(post_id(path)?).await?;
    render_form(
        &req,
        &state,
        FormPage::Edit(post.id),
        &post.fields(),
        &ValidationErrors::new(),
        None,
    )
}

/// POST /edit-post/{post_id}
pub async fn update_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = post_id(path)?;
    // Unknown posts are a 404 before the submission is looked at.
    state.posts.get_by_id(id).await?;

    let page = FormPage::Edit(id);
    let fields = match checked_fields(&req, &state, page, form.into_inner())? {
        Ok(fields) => fields,
        Err(rejection) => return Ok(rejection),
    };

    match state.posts.update(id, fields.clone()).await {
        Ok(_) => Ok(redirect(&format!("/post/{id}"))),
        Err(err) => reject(&req, &state, page, &fields, err),
    }
}

/// GET /delete/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state.posts.delete(post_id(path)?).await?;
    Ok(redirect("/"))
}

fn post_id(path: web::Path<PostId>) -> AppResult<PostId> {
    let id = path.into_inner();
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::NotFound(format!("No post with id {id}")))
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Verify the CSRF token and the field rules.
///
/// The inner `Err` is the re-rendered form to send back instead of touching the store.
fn checked_fields(
    req: &HttpRequest,
    state: &AppState,
    page: FormPage,
    form: PostForm,
) -> AppResult<Result<PostFields, HttpResponse>> {
    let token_ok = csrf::verify(req, &state.cookie_key, &form.csrf_token);
    let fields = PostFields {
        title: form.title,
        subtitle: form.subtitle,
        author: form.author,
        img_url: form.img_url,
        body: form.body,
    }
    .trimmed();

    if !token_ok {
        tracing::warn!("Rejected post form with a missing or invalid CSRF token");
        let form_error = Some(csrf::CSRF_ERROR);
        return render_form(req, state, page, &fields, &ValidationErrors::new(), form_error)
            .map(Err);
    }

    if let Err(errors) = validate_post(&fields) {
        tracing::debug!(%errors, "Post form failed validation");
        return render_form(req, state, page, &fields, &errors, None).map(Err);
    }

    Ok(Ok(fields))
}

/// Turn a store rejection into a form re-render; other failures propagate.
fn reject(
    req: &HttpRequest,
    state: &AppState,
    page: FormPage,
    fields: &PostFields,
    err: DomainError,
) -> AppResult<HttpResponse> {
    let errors = match err {
        DomainError::Validation(errors) => errors,
        DomainError::Duplicate { .. } => {
            let mut errors = ValidationErrors::new();
            errors.add("title", DUPLICATE_TITLE_MESSAGE);
            errors
        }
        other => return Err(other.into()),
    };

    render_form(req, state, page, fields, &errors, None)
}

/// Render the post form with the request's CSRF token, issuing one if needed.
///
/// Forms carrying errors are answered with 422 so clients can tell a rejection apart.
fn render_form(
    req: &HttpRequest,
    state: &AppState,
    page: FormPage,
    values: &PostFields,
    errors: &ValidationErrors,
    form_error: Option<&str>,
) -> AppResult<HttpResponse> {
    let issued = csrf::issue(req, &state.cookie_key);

    let mut template = MakePostTemplate::new(page.heading(), page.action(), values, errors);
    template.csrf_token = issued.token;
    template.form_errors = form_error.map(str::to_string).into_iter().collect();

    let status = if errors.is_empty() && form_error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let mut builder = HttpResponse::build(status);
    builder.cookie(issued.cookie);
    views::render_with(builder, &template)
}
