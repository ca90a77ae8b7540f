use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::crud::{self, ListQuery, Resource, SqlValue};
use crate::error::AppError;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AttendanceForm {
    /// Not validated against the employees table.
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2026-08-07", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// Free text; no enumeration enforced.
    #[schema(example = "present")]
    pub status: String,
}

/// Edits overwrite date and status only; the employee reference is fixed at
/// creation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AttendanceUpdateForm {
    #[schema(example = "2026-08-07", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "absent")]
    pub status: String,
}

impl Resource for Attendance {
    const TABLE: &'static str = "attendance";
    const LIST_PATH: &'static str = "/attendance";

    type Form = AttendanceForm;
    type UpdateForm = AttendanceUpdateForm;

    fn insert_fields(form: &Self::Form) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("employee_id", SqlValue::Integer(form.employee_id)),
            ("date", SqlValue::Date(form.date)),
            ("status", SqlValue::Text(form.status.clone())),
        ]
    }

    fn update_fields(form: &Self::UpdateForm) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("date", SqlValue::Date(form.date)),
            ("status", SqlValue::Text(form.status.clone())),
        ]
    }

    fn filter_column() -> Option<&'static str> {
        Some("employee_id")
    }
}

/// List attendance rows, optionally filtered by employee reference.
#[utoipa::path(
    get,
    path = "/attendance",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching attendance rows", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let records = crud::list::<Attendance>(pool.get_ref(), query.q.as_deref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// The add form needs the employee roster for its dropdown.
#[utoipa::path(
    get,
    path = "/add_attendance",
    responses(
        (status = 200, description = "Employee roster for the form", body = [Employee])
    ),
    tag = "Attendance"
)]
pub async fn add_attendance_form(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let employees = crud::list::<Employee>(pool.get_ref(), None).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Record attendance. The employee reference is taken as submitted.
#[utoipa::path(
    post,
    path = "/add_attendance",
    request_body(content = AttendanceForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirects to the attendance list")),
    tag = "Attendance"
)]
pub async fn add_attendance(
    pool: web::Data<SqlitePool>,
    form: web::Form<AttendanceForm>,
) -> Result<HttpResponse, AppError> {
    crud::insert::<Attendance>(pool.get_ref(), &form.into_inner()).await?;
    Ok(crud::see_other(Attendance::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/edit_attendance/{id}",
    params(("id", Path, description = "Attendance id")),
    responses(
        (status = 200, description = "Attendance row to edit", body = Attendance),
        (status = 404, description = "Attendance row not found")
    ),
    tag = "Attendance"
)]
pub async fn edit_attendance_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let record = crud::fetch::<Attendance>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    post,
    path = "/edit_attendance/{id}",
    params(("id", Path, description = "Attendance id")),
    request_body(content = AttendanceUpdateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirects to the attendance list"),
        (status = 404, description = "Attendance row not found")
    ),
    tag = "Attendance"
)]
pub async fn edit_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Form<AttendanceUpdateForm>,
) -> Result<HttpResponse, AppError> {
    crud::update::<Attendance>(pool.get_ref(), path.into_inner(), &form.into_inner()).await?;
    Ok(crud::see_other(Attendance::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/delete_attendance/{id}",
    params(("id", Path, description = "Attendance id")),
    responses(
        (status = 200, description = "Attendance row pending confirmation", body = Attendance),
        (status = 404, description = "Attendance row not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let record = crud::fetch::<Attendance>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    post,
    path = "/delete_attendance/{id}",
    params(("id", Path, description = "Attendance id")),
    responses(
        (status = 303, description = "Redirects to the attendance list"),
        (status = 404, description = "Attendance row not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    crud::delete::<Attendance>(pool.get_ref(), path.into_inner()).await?;
    Ok(crud::see_other(Attendance::LIST_PATH))
}
