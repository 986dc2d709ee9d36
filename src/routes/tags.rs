use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags::{TagListParams, list_tags as list_tags_service};

#[get("/tags")]
pub async fn list_tags(
    params: web::Query<TagListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_tags_service(params.into_inner(), repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response(err, "Tags not found", "Failed to fetch tags"),
    }
}
