use sqlx::SqlitePool;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePool::connect(database_url).await
}

// Referential columns are declared but not enforced: the app accepts
// attendance rows pointing at employees that no longer exist.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS departments (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        date_of_birth DATE NOT NULL,
        department_id INTEGER REFERENCES departments (id)
    )",
    "CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY,
        employee_id INTEGER REFERENCES employees (id),
        date DATE NOT NULL,
        status TEXT NOT NULL
    )",
];

/// Apply the schema at startup. Idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
