//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;


use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Largest accepted form body; post bodies are rich HTML.
const FORM_LIMIT: usize = 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT))
        // Non-numeric ids are unknown posts, not malformed requests
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            error::Error::from(AppError::NotFound(format!("No such post: {err}")))
        }))
        .route("/", web::get().to(posts::list_posts))
        .route("/post/{post_id}", web::get().to(posts::show_post))
        .route("/new-post", web::get().to(posts::new_post_form))
        .route("/new-post", web::post().to(posts::create_post))
        .route("/edit-post/{post_id}", web::get().to(posts::edit_post_form))
        .route("/edit-post/{post_id}", web::post().to(posts::update_post))
        .route("/delete/{post_id}", web::get().to(posts::delete_post))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact))
        .route("/health", web::get().to(health::health_check))
        .default_service(web::to(pages::not_found));
}
