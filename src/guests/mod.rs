mod create;
mod delete;
mod list;
mod rsvp;
mod search;
mod update;

use axum::{
    Router,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::{AppError, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_guests).post(create::create_guest))
        .route("/search", post(search::search_guests))
        .route("/{id}", put(update::update_guest).delete(delete::delete_guest))
        .route("/{id}/rsvp", put(rsvp::rsvp_guest))
}

/// An invitee record. `other_names` holds aliases the guest may be looked
/// up under; `added_by` and `date_created` are fixed at creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub other_names: Vec<String>,
    pub email: Option<String>,
    pub attending: bool,
    pub max_plusses: i64,
    pub plusses: i64,
    pub dietary_restrictions: Option<String>,
    pub karaoke_song: Option<String>,
    pub added_by: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for Guest {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let other_names: String = row.try_get("other_names")?;

        Ok(Self {
            id: row.try_get("id")?,
            last_name: row.try_get("last_name")?,
            first_name: row.try_get("first_name")?,
            other_names: serde_json::from_str(&other_names).map_err(|e| {
                sqlx::Error::ColumnDecode {
                    index: "other_names".to_owned(),
                    source: Box::new(e),
                }
            })?,
            email: row.try_get("email")?,
            attending: row.try_get("attending")?,
            max_plusses: row.try_get("max_plusses")?,
            plusses: row.try_get("plusses")?,
            dietary_restrictions: row.try_get("dietary_restrictions")?,
            karaoke_song: row.try_get("karaoke_song")?,
            added_by: row.try_get("added_by")?,
            date_created: row.try_get("date_created")?,
            date_modified: row.try_get("date_modified")?,
        })
    }
}

pub(crate) async fn find_guest(
    db_pool: &SqlitePool,
    id: &str,
) -> Result<Option<Guest>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM guests WHERE id=?")
        .bind(id)
        .fetch_optional(db_pool)
        .await
}

pub(crate) async fn insert_guest(db_pool: &SqlitePool, guest: &Guest) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO guests (id,last_name,first_name,other_names,email,attending,max_plusses,plusses,dietary_restrictions,karaoke_song,added_by,date_created,date_modified) \
         VALUES (?,?,?,?,?,?,?,?,?,?,?,?,?)",
    )
    .bind(&guest.id)
    .bind(&guest.last_name)
    .bind(&guest.first_name)
    .bind(serde_json::to_string(&guest.other_names).map_err(anyhow::Error::from)?)
    .bind(&guest.email)
    .bind(guest.attending)
    .bind(guest.max_plusses)
    .bind(guest.plusses)
    .bind(&guest.dietary_restrictions)
    .bind(&guest.karaoke_song)
    .bind(&guest.added_by)
    .bind(guest.date_created)
    .bind(guest.date_modified)
    .execute(db_pool)
    .await?;

    Ok(())
}

/// Writes back every mutable column of an existing row.
pub(crate) async fn store_guest(db_pool: &SqlitePool, guest: &Guest) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE guests SET last_name=?, first_name=?, other_names=?, email=?, attending=?, \
         max_plusses=?, plusses=?, dietary_restrictions=?, karaoke_song=?, date_modified=? \
         WHERE id=?",
    )
    .bind(&guest.last_name)
    .bind(&guest.first_name)
    .bind(serde_json::to_string(&guest.other_names).map_err(anyhow::Error::from)?)
    .bind(&guest.email)
    .bind(guest.attending)
    .bind(guest.max_plusses)
    .bind(guest.plusses)
    .bind(&guest.dietary_restrictions)
    .bind(&guest.karaoke_song)
    .bind(guest.date_modified)
    .bind(&guest.id)
    .execute(db_pool)
    .await?;

    Ok(())
}

// Length bounds on the free-text fields, checked before any write.
pub(crate) fn validate_bounds(
    email: Option<&str>,
    dietary_restrictions: Option<&str>,
    karaoke_song: Option<&str>,
) -> Result<(), AppError> {
    if email.is_some_and(|e| e.len() < 5 || e.len() > 256) {
        return Err(AppError::Validation("Invalid email"));
    }
    if dietary_restrictions.is_some_and(|d| d.len() > 500) {
        return Err(AppError::Validation("Dietary restrictions too long"));
    }
    if karaoke_song.is_some_and(|s| s.len() > 50) {
        return Err(AppError::Validation("Karaoke song too long"));
    }

    Ok(())
}
