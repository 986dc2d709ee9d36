use std::time::Instant;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use resource_organizer::repository::DieselRepository;
use resource_organizer::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(routes::json_config())
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(Instant::now()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn resource_lifecycle() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({
            "name": "Team wiki",
            "url": "https://wiki.local",
            "type": "URL",
            "tags": ["docs", "docs"],
            "isFavorite": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["tags"], json!(["docs", "docs"]));
    assert_eq!(created["accessCount"], 0);
    assert_eq!(created["isFavorite"], true);
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/resources/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["accessCount"], 1);
    assert!(fetched["lastAccessed"].is_string());

    let req = test::TestRequest::put()
        .uri(&format!("/resources/{id}"))
        .set_json(json!({"name": "Wiki", "url": "/srv/wiki", "type": "FOLDER"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["type"], "FOLDER");
    assert_eq!(updated["tags"], json!([]));
    assert_eq!(updated["isFavorite"], false);

    let req = test::TestRequest::delete()
        .uri(&format!("/resources/{id}"))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["message"], "Resource deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/resources/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Resource not found");
}

#[actix_web::test]
async fn missing_required_fields_are_rejected() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({"name": "No url", "type": "URL"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Name, URL, and type are required");

    let req = test::TestRequest::post()
        .uri("/contacts")
        .set_json(json!({"email": "someone@corp.local"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Full name is required");

    let req = test::TestRequest::post()
        .uri("/resources")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn list_reports_filtered_total_and_window() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    for i in 1..=10 {
        let name = if i % 3 == 0 {
            format!("x-ray {i}")
        } else {
            format!("item {i}")
        };
        let req = test::TestRequest::post()
            .uri("/resources")
            .set_json(json!({"name": name, "url": format!("/share/{i}"), "type": "FOLDER"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/resources?q=x&limit=2&offset=0&sortBy=name&sortOrder=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 0);
    let names: Vec<&str> = body["resources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["x-ray 3", "x-ray 6"]);

    let req = test::TestRequest::get()
        .uri("/resources?limit=abc&offset=-1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["limit"], 50);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["total"], 10);

    let req = test::TestRequest::get()
        .uri("/resources?type=LINK")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn tags_count_duplicates_across_records() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({
            "name": "Reference",
            "url": "https://ref.local",
            "type": "URL",
            "tags": ["ref", "ref"]
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/contacts")
        .set_json(json!({"fullName": "Ada", "tags": ["math", " ref "]}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["tags"], json!(["ref", "math"]));
    assert_eq!(
        body["tagsWithFrequency"],
        json!([{"tag": "ref", "frequency": 3}, {"tag": "math", "frequency": 1}])
    );
    assert_eq!(body["total"], 2);

    let req = test::TestRequest::get()
        .uri("/tags?sortBy=alphabetical&limit=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["tags"], json!(["math"]));
    assert_eq!(body["total"], 2);
}

#[actix_web::test]
async fn contacts_search_and_not_found() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    for (name, department, mobile) in [
        ("Grace Hopper", "Research", "0700 555"),
        ("Linus", "Kernel", "0800 111"),
    ] {
        let req = test::TestRequest::post()
            .uri("/contacts")
            .set_json(json!({
                "fullName": name,
                "department": department,
                "mobileNumber": mobile
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get().uri("/contacts?q=555").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["contacts"][0]["fullName"], "Grace Hopper");

    let req = test::TestRequest::get()
        .uri("/contacts?department=kern")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["contacts"][0]["fullName"], "Linus");

    let req = test::TestRequest::get().uri("/contacts/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Contact not found");
}

#[actix_web::test]
async fn categories_and_health() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({"name": "Engineering"}))
        .to_request();
    let category: Value = test::call_and_read_body_json(&app, req).await;
    let category_id = category["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({
            "name": "Runbook",
            "url": "https://runbook.local",
            "type": "URL",
            "categoryId": category_id
        }))
        .to_request();
    let resource: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resource["category"]["name"], "Engineering");

    let req = test::TestRequest::get()
        .uri(&format!("/resources?q=engineering&categoryId={category_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({
            "name": "Orphan",
            "url": "https://orphan.local",
            "type": "URL",
            "categoryId": 404
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/categories").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "healthy");
    assert!(health["uptime"].as_f64().unwrap() >= 0.0);
    assert!(health["timestamp"].is_string());
}

#[actix_web::test]
async fn duplicate_tags_are_stored_and_counted() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/resources")
        .set_json(json!({
            "name": "Docs",
            "url": "https://x.io",
            "type": "URL",
            "tags": ["ref", "ref"]
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["tags"], json!(["ref", "ref"]));

    let req = test::TestRequest::get().uri("/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["tagsWithFrequency"],
        json!([{"tag": "ref", "frequency": 2}])
    );
}
