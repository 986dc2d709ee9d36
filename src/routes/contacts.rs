use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::MessageDto;
use crate::forms::contacts::ContactForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::contacts::{
    ContactListParams, create_contact as create_contact_service,
    delete_contact as delete_contact_service, get_contact as get_contact_service,
    list_contacts as list_contacts_service, update_contact as update_contact_service,
};

const NOT_FOUND: &str = "Contact not found";

#[get("/contacts")]
pub async fn list_contacts(
    params: web::Query<ContactListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_contacts_service(params.into_inner(), repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch contacts"),
    }
}

#[post("/contacts")]
pub async fn create_contact(
    form: web::Json<ContactForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_contact_service(form.into_inner(), repo.get_ref()) {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(err) => error_response(err, NOT_FOUND, "Failed to create contact"),
    }
}

#[get("/contacts/{contact_id}")]
pub async fn get_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_contact_service(contact_id.into_inner(), repo.get_ref()) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err, NOT_FOUND, "Failed to fetch contact"),
    }
}

#[put("/contacts/{contact_id}")]
pub async fn update_contact(
    contact_id: web::Path<i32>,
    form: web::Json<ContactForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_contact_service(contact_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(contact) => HttpResponse::Ok().json(contact),
        Err(err) => error_response(err, NOT_FOUND, "Failed to update contact"),
    }
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_contact_service(contact_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageDto {
            message: "Contact deleted successfully".to_string(),
        }),
        Err(err) => error_response(err, NOT_FOUND, "Failed to delete contact"),
    }
}
