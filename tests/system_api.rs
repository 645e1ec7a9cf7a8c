mod common;

use actix_web::{test, web, App};
use mvphrm_backend::routes;
use serde_json::{json, Value};

macro_rules! spawn_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_check_responds_ok() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn frontend_log_is_accepted() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/logs")
        .set_json(json!({"level": "warn", "message": "slow page", "url": "/dashboard"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));
}

#[actix_web::test]
async fn frontend_log_with_unknown_level_is_rejected() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/logs")
        .set_json(json!({"level": "fatal", "message": "boom"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn openapi_document_is_served() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::get()
        .uri("/api-doc/openapi.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let doc: Value = test::read_body_json(resp).await;
    assert!(doc["paths"].get("/employees").is_some());
    assert!(doc["paths"].get("/attendance").is_some());
}
