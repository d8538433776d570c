use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

// `other_names` is a JSON-encoded array; `email` is unique when present
// (SQLite ignores NULLs in UNIQUE columns).
const CREATE_GUESTS: &str = "CREATE TABLE IF NOT EXISTS guests (
    id TEXT PRIMARY KEY,
    last_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    other_names TEXT NOT NULL DEFAULT '[]',
    email TEXT UNIQUE,
    attending INTEGER NOT NULL DEFAULT 0,
    max_plusses INTEGER NOT NULL DEFAULT 0,
    plusses INTEGER NOT NULL DEFAULT 0,
    dietary_restrictions TEXT,
    karaoke_song TEXT,
    added_by TEXT,
    date_created TEXT NOT NULL,
    date_modified TEXT NOT NULL
)";

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await?;

    init_schema(&db_pool).await?;

    Ok(db_pool)
}

pub async fn init_schema(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_GUESTS).execute(db_pool).await?;
    sqlx::query(CREATE_USERS).execute(db_pool).await?;
    Ok(())
}
