use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::MessageDto;
use crate::forms::resources::ResourceForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::resources::{
    ResourceListParams, create_resource as create_resource_service,
    delete_resource as delete_resource_service, get_resource as get_resource_service,
    list_resources as list_resources_service, update_resource as update_resource_service,
};

const NOT_FOUND: &str = "Resource not found";

#[get("/resources")]
pub async fn list_resources(
    params: web::Query<ResourceListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_resources_service(params.into_inner(), repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch resources"),
    }
}

#[post("/resources")]
pub async fn create_resource(
    form: web::Json<ResourceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_resource_service(form.into_inner(), repo.get_ref()) {
        Ok(resource) => HttpResponse::Created().json(resource),
        Err(err) => error_response(err, NOT_FOUND, "Failed to create resource"),
    }
}

#[get("/resources/{resource_id}")]
pub async fn get_resource(
    resource_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_resource_service(resource_id.into_inner(), repo.get_ref()) {
        Ok(resource) => HttpResponse::Ok().json(resource),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch resource"),
    }
}

#[put("/resources/{resource_id}")]
pub async fn update_resource(
    resource_id: web::Path<i32>,
    form: web::Json<ResourceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_resource_service(resource_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(resource) => HttpResponse::Ok().json(resource),
        Err(err) => error_response(err, NOT_FOUND, "Failed to update resource"),
    }
}

#[delete("/resources/{resource_id}")]
pub async fn delete_resource(
    resource_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_resource_service(resource_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto {
            message: "Resource deleted successfully".to_string(),
        }),
        Err(err) => error_response(err, NOT_FOUND, "Failed to delete resource"),
    }
}
