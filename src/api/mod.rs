use actix_web::{Responder, get};
use serde::{Deserialize, Deserializer};

pub mod attendance;
pub mod department;
pub mod employee;

#[get("/")]
pub async fn index() -> impl Responder {
    "Department, employee and attendance records"
}

/// Browsers submit an unselected `<select>` as an empty string; treat that as
/// no reference rather than a deserialization failure.
pub(crate) fn empty_to_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
