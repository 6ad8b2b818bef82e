use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::test::{TestRequest, call_service, init_service, read_body};
use actix_web::{App, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use tera::Tera;
use vroom::configure_routes;
use vroom::repository::{DieselRepository, VehicleMakeReader};
use vroom::routes::alert_level_to_str;

mod common;

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

macro_rules! init_app {
    ($repo:expr) => {{
        let tera = Tera::new("templates/**/*").expect("templates parse");
        let store = CookieMessageStore::builder(Key::from(&[7u8; 64])).build();
        let flash = FlashMessagesFramework::builder(store).build();
        init_service(
            App::new()
                .wrap(flash)
                .configure(configure_routes)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new($repo)),
        )
        .await
    }};
}

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = test_db.repo();
    repo.seed_catalog().expect("seed");
    repo
}

#[actix_web::test]
async fn index_redirects_to_makes() {
    let test_db = common::TestDb::new("index_redirects_to_makes.db");
    let app = init_app!(test_db.repo());

    let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/makes");
}

#[actix_web::test]
async fn makes_listing_applies_query() {
    let test_db = common::TestDb::new("makes_listing_applies_query.db");
    let app = init_app!(seeded_repo(&test_db));

    let req = TestRequest::get()
        .uri("/makes?searchQuery=vw&sortBy=Name&descending=false&pageNumber=1&pageSize=10")
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("Volkswagen"));
    assert!(!body.contains(">BMW<"));
}

#[actix_web::test]
async fn models_listing_shows_make_names() {
    let test_db = common::TestDb::new("models_listing_shows_make_names.db");
    let app = init_app!(seeded_repo(&test_db));

    let resp = call_service(
        &app,
        TestRequest::get().uri("/models?searchQuery=fo").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("Focus"));
    assert!(body.contains("Ford"));
    assert!(!body.contains("X5"));
}

#[actix_web::test]
async fn create_page_is_not_treated_as_an_id() {
    let test_db = common::TestDb::new("create_page_is_not_treated_as_an_id.db");
    let app = init_app!(test_db.repo());

    let resp = call_service(
        &app,
        TestRequest::get().uri("/makes/create").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_make_is_not_found() {
    let test_db = common::TestDb::new("unknown_make_is_not_found.db");
    let app = init_app!(test_db.repo());

    for uri in ["/makes/999", "/makes/-1", "/models/3/edit"] {
        let resp = call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn posting_a_make_creates_it() {
    let test_db = common::TestDb::new("posting_a_make_creates_it.db");
    let repo = test_db.repo();
    let app = init_app!(repo.clone());

    let req = TestRequest::post()
        .uri("/makes/create")
        .set_form([("name", "Mazda"), ("abbreviation", "MAZDA")])
        .to_request();
    let resp = call_service(&app, req).await;

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/makes/1");
    let makes = repo.list_makes().unwrap();
    assert_eq!(makes.len(), 1);
    assert_eq!(makes[0].name.as_str(), "Mazda");
}

#[actix_web::test]
async fn posting_a_blank_make_rerenders_form() {
    let test_db = common::TestDb::new("posting_a_blank_make_rerenders_form.db");
    let repo = test_db.repo();
    let app = init_app!(repo.clone());

    let req = TestRequest::post()
        .uri("/makes/create")
        .set_form([("name", ""), ("abbreviation", "X")])
        .to_request();
    let resp = call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(repo.list_makes().unwrap().is_empty());
}

#[actix_web::test]
async fn deleting_a_make_redirects_to_listing() {
    let test_db = common::TestDb::new("deleting_a_make_redirects_to_listing.db");
    let repo = seeded_repo(&test_db);
    let app = init_app!(repo.clone());

    let resp = call_service(
        &app,
        TestRequest::post().uri("/makes/1/delete").to_request(),
    )
    .await;

    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/makes");
    assert_eq!(repo.list_makes().unwrap().len(), 2);
}
