use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::MessageDto;
use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

const NOT_FOUND: &str = "Category not found";

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch categories"),
    }
}

#[post("/categories")]
pub async fn create_category(
    form: web::Json<CategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_category_service(form.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response(err, NOT_FOUND, "Failed to create category"),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch category"),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    form: web::Json<CategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_category_service(category_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, NOT_FOUND, "Failed to update category"),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto {
            message: "Category deleted successfully".to_string(),
        }),
        Err(err) => error_response(err, NOT_FOUND, "Failed to delete category"),
    }
}
