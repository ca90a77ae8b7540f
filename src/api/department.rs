use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::crud::{self, Resource, SqlValue};
use crate::error::AppError;
use crate::model::department::Department;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DepartmentForm {
    #[schema(example = "Engineering")]
    pub name: String,
}

impl Resource for Department {
    const TABLE: &'static str = "departments";
    const LIST_PATH: &'static str = "/departments";

    type Form = DepartmentForm;
    type UpdateForm = DepartmentForm;

    fn insert_fields(form: &Self::Form) -> Vec<(&'static str, SqlValue)> {
        vec![("name", SqlValue::Text(form.name.clone()))]
    }

    fn update_fields(form: &Self::UpdateForm) -> Vec<(&'static str, SqlValue)> {
        Self::insert_fields(form)
    }

    // Dependents go first: attendance of the department's employees, then the
    // employees themselves. The department row is deleted by the caller in
    // the same transaction.
    fn cascade() -> &'static [&'static str] {
        &[
            "DELETE FROM attendance WHERE employee_id IN \
             (SELECT id FROM employees WHERE department_id = ?)",
            "DELETE FROM employees WHERE department_id = ?",
        ]
    }
}

/// List all departments.
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All department rows", body = [Department])
    ),
    tag = "Department"
)]
pub async fn show_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let departments = crud::list::<Department>(pool.get_ref(), None).await?;
    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    get,
    path = "/add_department",
    responses((status = 200, description = "Blank form context")),
    tag = "Department"
)]
pub async fn add_department_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({}))
}

/// Create a department. No duplicate-name check.
#[utoipa::path(
    post,
    path = "/add_department",
    request_body(content = DepartmentForm, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirects to the department list")),
    tag = "Department"
)]
pub async fn add_department(
    pool: web::Data<SqlitePool>,
    form: web::Form<DepartmentForm>,
) -> Result<HttpResponse, AppError> {
    crud::insert::<Department>(pool.get_ref(), &form.into_inner()).await?;
    Ok(crud::see_other(Department::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/edit_department/{id}",
    params(("id", Path, description = "Department id")),
    responses(
        (status = 200, description = "Department to edit", body = Department),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn edit_department_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department = crud::fetch::<Department>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(department))
}

/// Overwrite the department's name.
#[utoipa::path(
    post,
    path = "/edit_department/{id}",
    params(("id", Path, description = "Department id")),
    request_body(content = DepartmentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirects to the department list"),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn edit_department(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    form: web::Form<DepartmentForm>,
) -> Result<HttpResponse, AppError> {
    crud::update::<Department>(pool.get_ref(), path.into_inner(), &form.into_inner()).await?;
    Ok(crud::see_other(Department::LIST_PATH))
}

#[utoipa::path(
    get,
    path = "/delete_department/{id}",
    params(("id", Path, description = "Department id")),
    responses(
        (status = 200, description = "Department pending confirmation", body = Department),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn delete_department_form(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let department = crud::fetch::<Department>(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(department))
}

/// Delete the department and everything hanging off it.
#[utoipa::path(
    post,
    path = "/delete_department/{id}",
    params(("id", Path, description = "Department id")),
    responses(
        (status = 303, description = "Redirects to the department list"),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn delete_department(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    crud::delete::<Department>(pool.get_ref(), path.into_inner()).await?;
    Ok(crud::see_other(Department::LIST_PATH))
}
