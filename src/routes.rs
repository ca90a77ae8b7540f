use actix_web::web;

use crate::api::{self, attendance, department, employee};

// The `{id:\d+}` segments keep non-numeric ids from matching at all, so a
// request for /edit_department/abc is a plain 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::index)
        .service(web::resource("/departments").route(web::get().to(department::show_departments)))
        .service(
            web::resource("/add_department")
                .route(web::get().to(department::add_department_form))
                .route(web::post().to(department::add_department)),
        )
        .service(
            web::resource("/edit_department/{id:\\d+}")
                .route(web::get().to(department::edit_department_form))
                .route(web::post().to(department::edit_department)),
        )
        .service(
            web::resource("/delete_department/{id:\\d+}")
                .route(web::get().to(department::delete_department_form))
                .route(web::post().to(department::delete_department)),
        )
        .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        .service(
            web::resource("/add_employee")
                .route(web::get().to(employee::add_employee_form))
                .route(web::post().to(employee::add_employee)),
        )
        .service(
            web::resource("/edit_employee/{id:\\d+}")
                .route(web::get().to(employee::edit_employee_form))
                .route(web::post().to(employee::edit_employee)),
        )
        .service(
            web::resource("/delete_employee/{id:\\d+}")
                .route(web::get().to(employee::delete_employee_form))
                .route(web::post().to(employee::delete_employee)),
        )
        .service(web::resource("/attendance").route(web::get().to(attendance::list_attendance)))
        .service(
            web::resource("/add_attendance")
                .route(web::get().to(attendance::add_attendance_form))
                .route(web::post().to(attendance::add_attendance)),
        )
        .service(
            web::resource("/edit_attendance/{id:\\d+}")
                .route(web::get().to(attendance::edit_attendance_form))
                .route(web::post().to(attendance::edit_attendance)),
        )
        .service(
            web::resource("/delete_attendance/{id:\\d+}")
                .route(web::get().to(attendance::delete_attendance_form))
                .route(web::post().to(attendance::delete_attendance)),
        );
}
