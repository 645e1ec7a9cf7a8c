use actix_web::{web, Responder};
use utoipa::OpenApi;

use crate::api;
use crate::model::attendance::{Attendance, AttendanceStatus, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};

#[derive(OpenApi)]
#[openapi(
    info(title = "MVPHRM Backend", description = "Employee and attendance record keeping"),
    paths(
        api::employee::create_employee,
        api::employee::list_employees,
        api::employee::get_employee,
        api::employee::update_employee,
        api::employee::delete_employee,
        api::attendance::mark_attendance,
        api::attendance::list_attendance,
        api::attendance::get_attendance,
        api::attendance::get_attendance_by_date,
        api::system::health_check,
        api::system::receive_frontend_log,
    ),
    components(schemas(
        Employee,
        NewEmployee,
        Attendance,
        NewAttendance,
        AttendanceStatus,
        api::system::FrontendLogEntry,
        api::system::LogLevel,
    )),
    tags(
        (name = "Employees", description = "Employee CRUD"),
        (name = "Attendance", description = "Daily attendance records"),
        (name = "System", description = "Health and log forwarding")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl Responder {
    web::Json(ApiDoc::openapi())
}
