use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::model::attendance::{Attendance, NewAttendance};
use crate::service;

/// Mark attendance for an employee
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Attendance),
        (status = 400, description = "Duplicate record or invalid data"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewAttendance>,
) -> Result<HttpResponse, ApiError> {
    let record = service::attendance::mark(pool.get_ref(), &payload).await?;
    Ok(HttpResponse::Created().json(record))
}

/// List all attendance records
#[utoipa::path(
    get,
    path = "/attendance",
    responses(
        (status = 200, description = "All attendance records", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = service::attendance::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// List attendance records for one employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records for the employee", body = [Attendance]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let records = service::attendance::list_for_employee(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Get attendance for one employee on one date
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}/{date}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID"),
        ("date" = String, Path, description = "Date in YYYY-MM-DD format")
    ),
    responses(
        (status = 200, description = "Attendance record", body = Attendance),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Employee or record not found")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance_by_date(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, String)>,
) -> Result<HttpResponse, ApiError> {
    let (employee_id, raw_date) = path.into_inner();
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Date must be in YYYY-MM-DD format".to_string()))?;

    let record = service::attendance::get_by_date(pool.get_ref(), employee_id, date).await?;
    Ok(HttpResponse::Ok().json(record))
}
