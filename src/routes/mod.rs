use actix_web::{HttpResponse, web};

use crate::dto::ErrorDto;
use crate::services::ServiceError;

pub mod categories;
pub mod contacts;
pub mod health;
pub mod resources;
pub mod tags;

/// Register every JSON endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(resources::list_resources)
        .service(resources::create_resource)
        .service(resources::get_resource)
        .service(resources::update_resource)
        .service(resources::delete_resource)
        .service(contacts::list_contacts)
        .service(contacts::create_contact)
        .service(contacts::get_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact)
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::get_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        .service(tags::list_tags)
        .service(health::health);
}

/// Map a service failure onto its HTTP status and `{error}` body.
///
/// `not_found` and `failure` are the messages used for 404 and 500.
pub fn error_response(err: ServiceError, not_found: &str, failure: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorDto::new(not_found)),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorDto::new(message))
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(ErrorDto::new(failure)),
    }
}

/// JSON extractor settings: malformed bodies are answered with 400 and an
/// `{error}` body instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {err}");
        let response = HttpResponse::BadRequest().json(ErrorDto::new(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
