use std::time::Instant;

use actix_web::{HttpResponse, Responder, get, web};

use crate::services::health::health as health_service;

#[get("/health")]
pub async fn health(started_at: web::Data<Instant>) -> impl Responder {
    HttpResponse::Ok().json(health_service(*started_at.get_ref()))
}
