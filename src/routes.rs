use crate::api::{attendance, employee, system};
use crate::docs;
use crate::error::ApiError;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and path segments surface as the domain validation
    // error instead of actix's default text response.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(
                web::resource("")
                    .route(web::post().to(attendance::mark_attendance))
                    .route(web::get().to(attendance::list_attendance)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}").route(web::get().to(attendance::get_attendance)),
            )
            // /attendance/{employee_id}/{date}
            .service(
                web::resource("/{employee_id}/{date}")
                    .route(web::get().to(attendance::get_attendance_by_date)),
            ),
    );

    cfg.service(web::resource("/health").route(web::get().to(system::health_check)));
    cfg.service(web::resource("/api/logs").route(web::post().to(system::receive_frontend_log)));
    cfg.service(web::resource("/api-doc/openapi.json").route(web::get().to(docs::openapi_json)));
}
