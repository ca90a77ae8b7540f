use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "date_of_birth": "1990-04-12",
        "department_id": 2
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    /// Globally unique; enforced by the store, not the handlers.
    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(
        example = "1990-04-12",
        value_type = String,
        format = "date"
    )]
    pub date_of_birth: NaiveDate,

    #[schema(example = 2, nullable = true)]
    pub department_id: Option<i64>,
}
