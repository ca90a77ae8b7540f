use actix_web::HttpResponse;
use actix_web::http::header;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use tracing::debug;
use utoipa::IntoParams;

use crate::error::AppError;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Null,
}

fn bind_value<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Date(v) => query.bind(v),
        SqlValue::Null => query.bind(None::<i64>),
    }
}

/// ===============================
/// Entity metadata
/// ===============================
///
/// One implementation per table. The CRUD operations below compose their SQL
/// from this metadata, so every entity shares a single set of handlers
/// instead of per-table copies.
pub trait Resource:
    for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static
{
    const TABLE: &'static str;
    /// Canonical listing page, used as the redirect target after writes.
    const LIST_PATH: &'static str;

    /// Create form payload.
    type Form: DeserializeOwned + Send;
    /// Edit form payload. Attendance edits overwrite fewer columns than
    /// creates, so the two payloads are distinct types.
    type UpdateForm: DeserializeOwned + Send;

    fn insert_fields(form: &Self::Form) -> Vec<(&'static str, SqlValue)>;
    fn update_fields(form: &Self::UpdateForm) -> Vec<(&'static str, SqlValue)>;

    /// Column the `?q=` substring filter applies to, if any.
    fn filter_column() -> Option<&'static str> {
        None
    }

    /// Dependent-row deletes to run before deleting a row of this table.
    /// Each statement binds the parent id exactly once.
    fn cascade() -> &'static [&'static str] {
        &[]
    }
}

#[derive(Debug, serde::Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring to filter the listing by.
    pub q: Option<String>,
}

/// ===============================
/// Operations
/// ===============================

pub async fn list<R: Resource>(
    pool: &SqlitePool,
    filter: Option<&str>,
) -> Result<Vec<R>, AppError> {
    let rows = match (filter, R::filter_column()) {
        (Some(needle), Some(column)) => {
            let sql = format!(
                "SELECT * FROM {} WHERE CAST({} AS TEXT) LIKE ?",
                R::TABLE,
                column
            );
            debug!(sql = %sql, needle, "filtered listing");
            sqlx::query_as::<_, R>(&sql)
                .bind(format!("%{}%", needle))
                .fetch_all(pool)
                .await?
        }
        _ => {
            let sql = format!("SELECT * FROM {}", R::TABLE);
            sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn fetch<R: Resource>(pool: &SqlitePool, id: i64) -> Result<R, AppError> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE);
    sqlx::query_as::<_, R>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn insert<R: Resource>(pool: &SqlitePool, form: &R::Form) -> Result<(), AppError> {
    let fields = R::insert_fields(form);
    let columns: Vec<&str> = fields.iter().map(|(column, _)| *column).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        columns.join(", "),
        placeholders
    );

    let mut query = sqlx::query(&sql);
    for (_, value) in fields {
        query = bind_value(query, value);
    }
    query.execute(pool).await?;
    Ok(())
}

pub async fn update<R: Resource>(
    pool: &SqlitePool,
    id: i64,
    form: &R::UpdateForm,
) -> Result<(), AppError> {
    let fields = R::update_fields(form);
    let set_clause = fields
        .iter()
        .map(|(column, _)| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE {} SET {} WHERE id = ?", R::TABLE, set_clause);

    let mut query = sqlx::query(&sql);
    for (_, value) in fields {
        query = bind_value(query, value);
    }
    let result = query.bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Delete a row and its dependents in one transaction, so a failure partway
/// through a cascade cannot leave orphaned rows behind.
pub async fn delete<R: Resource>(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    for step in R::cascade() {
        sqlx::query(step).bind(id).execute(&mut *tx).await?;
    }

    let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound);
    }

    tx.commit().await?;
    Ok(())
}

/// Post-write redirect to the canonical listing page.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::department::DepartmentForm;
    use crate::db::init_schema;
    use crate::model::department::Department;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        init_schema(&pool).await.expect("schema");
        pool
    }

    #[actix_web::test]
    async fn insert_fetch_delete_roundtrip() {
        let pool = pool().await;

        insert::<Department>(&pool, &DepartmentForm { name: "Ops".into() })
            .await
            .unwrap();

        let row = fetch::<Department>(&pool, 1).await.unwrap();
        assert_eq!(row.name, "Ops");

        delete::<Department>(&pool, 1).await.unwrap();
        assert!(matches!(
            fetch::<Department>(&pool, 1).await,
            Err(AppError::NotFound)
        ));
    }

    #[actix_web::test]
    async fn update_missing_row_is_not_found() {
        let pool = pool().await;

        let result =
            update::<Department>(&pool, 42, &DepartmentForm { name: "Ops".into() }).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[actix_web::test]
    async fn delete_missing_row_is_not_found() {
        let pool = pool().await;

        let result = delete::<Department>(&pool, 42).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[actix_web::test]
    async fn see_other_points_at_listing() {
        let response = see_other("/departments");
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/departments"
        );
    }
}
