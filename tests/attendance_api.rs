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

macro_rules! create_employee {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({"name": "Worker", "email": $email}))
            .to_request();
        let created: Value = test::call_and_read_body_json($app, req).await;
        created["id"].as_i64().unwrap()
    }};
}

#[actix_web::test]
async fn mark_for_missing_employee_persists_nothing() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({"employee_id": 999, "date": "2024-03-01", "status": "Present"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Employee not found");

    let req = test::TestRequest::get().uri("/attendance").to_request();
    let records: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(records.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn duplicate_mark_for_same_day_conflicts() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let body = json!({"employee_id": id, "date": "2024-03-01", "status": "Present"});
    for expected in [201, 400] {
        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/attendance/{id}"))
        .to_request();
    let records: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn same_day_marks_for_different_employees_are_independent() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let first = create_employee!(&app, "first@company.com");
    let second = create_employee!(&app, "second@company.com");

    for id in [first, second] {
        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({"employee_id": id, "date": "2024-03-01", "status": "Absent"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }
}

#[actix_web::test]
async fn get_by_date_returns_marked_record() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({"employee_id": id, "date": "2024-03-05", "status": "Absent"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/attendance/{id}/2024-03-05"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let record: Value = test::read_body_json(resp).await;
    assert_eq!(record["employee_id"].as_i64(), Some(id));
    assert_eq!(record["status"], "Absent");
    // date always serializes as the ISO string form
    assert_eq!(record["date"], "2024-03-05");
}

#[actix_web::test]
async fn unknown_status_is_rejected_before_persisting() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({"employee_id": id, "date": "2024-03-01", "status": "Sick"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/attendance").to_request();
    let records: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(records.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn malformed_date_in_body_is_rejected() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({"employee_id": id, "date": "03/01/2024", "status": "Present"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn list_for_missing_employee_is_not_found() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);

    let req = test::TestRequest::get().uri("/attendance/123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn list_for_employee_without_records_is_empty() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::get()
        .uri(&format!("/attendance/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let records: Value = test::read_body_json(resp).await;
    assert_eq!(records, json!([]));
}

#[actix_web::test]
async fn get_by_date_with_bad_format_is_rejected() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::get()
        .uri(&format!("/attendance/{id}/05-03-2024"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Date must be in YYYY-MM-DD format");
}

#[actix_web::test]
async fn get_by_date_without_record_is_not_found() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::get()
        .uri(&format!("/attendance/{id}/2024-03-01"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["detail"],
        "No attendance record found for this employee on the specified date"
    );
}

#[actix_web::test]
async fn deleting_employee_cascades_attendance() {
    let pool = common::test_pool().await;
    let app = spawn_app!(pool);
    let id = create_employee!(&app, "worker@company.com");

    let req = test::TestRequest::post()
        .uri("/attendance")
        .set_json(json!({"employee_id": id, "date": "2024-03-01", "status": "Present"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/employees/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get().uri("/attendance").to_request();
    let records: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(records, json!([]));
}
