use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::api::empty_to_none;
use crate::crud::{self, ListQuery, Resource, SqlValue};
use crate::error::AppError;
use crate::model::employee::Employee;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EmployeeForm {
    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john@email.com", format = "email")]
    pub email: String,

    #[schema(example = "1990-04-12", value_type = String, format = "date")]
    pub date_of_birth: NaiveDate,

    #[serde(default, deserialize_with = "empty_to_none")]
    #[schema(example = 1, nullable = true)]
    pub department_id: Option<i64>,
}

impl Resource for Employee {
    const TABLE: &'static str = "employees";
    const LIST_PATH: &'static str = "/employees";

    type Form = EmployeeForm;
    type UpdateForm = EmployeeForm;

    fn insert_fields(form: &Self::Form) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", SqlValue::Text(form.name.clone())),
            ("email", SqlValue::Text(form.email.clone())),
            ("date_of_birth", SqlValue::Date(form.date_of_birth)),
            (
                "department_id",
                form.department_id
                    .map_or(SqlValue::Null, SqlValue::Integer),
            ),
        ]
    }

    fn update_fields(form: &Self::UpdateForm) -> Vec<(&'static str, SqlValue)> {
        Self::insert_fields(form)
    }

    fn filter_column() -> Option<&'static str> {
        Some("name")
    }

    fn cascade() -> &'static [&'static str] {
        &["DELETE FROM attendance WHERE employee_id = ?"]
    }
}

/// List employees, optionally filtered by a name substring.
#[utoipa::path(
    get,
    path = "/employees",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching employee rows", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = crud::list::<Employee>(pool.get_ref(), query.q.as_deref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

#[utoipa::path(
    get,
    path = "/add_employee",
    responses((status = 200, description = "Blank form context")),
    tag = "Employee"
)]
pub async fn add_employee_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({}))
}

/// Create an employee. Email uniqueness is enforced by the store at commit;
/// a violation surfaces as a 500, never as a field-level message.
#[utoipa::path(
    post,
    path = "/add_employee",
    request_body(content = EmployeeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirects to the employee list"),
        (status = 500, description = "Constraint violation")
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    pool: web::Data<SqlitePool>,
    form: web::Form<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    crud::insert::<Employee>(pool.get_ref(), &form.into_inner()).await?;
    Ok(crud::see_other(Employee::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/edit_employee/{id}",
    params(("id", Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee to edit", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn edit_employee_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = crud::fetch::<Employee>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Overwrite all mutable employee fields.
#[utoipa::path(
    post,
    path = "/edit_employee/{id}",
    params(("id", Path, description = "Employee id")),
    request_body(content = EmployeeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirects to the employee list"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn edit_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Form<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    crud::update::<Employee>(pool.get_ref(), path.into_inner(), &form.into_inner()).await?;
    Ok(crud::see_other(Employee::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/delete_employee/{id}",
    params(("id", Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee pending confirmation", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = crud::fetch::<Employee>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete the employee and its attendance rows.
#[utoipa::path(
    post,
    path = "/delete_employee/{id}",
    params(("id", Path, description = "Employee id")),
    responses(
        (status = 303, description = "Redirects to the employee list"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    crud::delete::<Employee>(pool.get_ref(), path.into_inner()).await?;
    Ok(crud::see_other(Employee::LIST_PATH))
}
