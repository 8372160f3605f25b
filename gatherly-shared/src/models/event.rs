/// Event model and database operations
///
/// This module provides the Event model, standard CRUD, and a filterable
/// listing. Filters compose with logical AND; absent filters are no-ops.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE events (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(200) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     location VARCHAR(200) NOT NULL DEFAULT '',
///     date DATE NOT NULL,
///     organizer_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Event model representing a scheduled activity
///
/// The event id is immutable once created; all other fields can change
/// through [`Event::update`].
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Unique event ID (UUID v4)
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// Free-form description (may be empty)
    pub description: String,

    /// Venue or address (may be empty)
    pub location: String,

    /// Calendar date the event takes place on
    pub date: NaiveDate,

    /// User who organizes the event
    pub organizer_id: Uuid,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// When the event was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub organizer_id: Uuid,
}

/// Input for updating an existing event
///
/// All fields are optional. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Optional listing predicates, composed with logical AND
///
/// Substring filters are case-insensitive; date bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    /// Case-insensitive substring match on the event title
    pub title: Option<String>,

    /// Only events on or after this date
    pub date_after: Option<NaiveDate>,

    /// Only events on or before this date
    pub date_before: Option<NaiveDate>,

    /// Case-insensitive substring match on the organizer's username
    pub organizer_username: Option<String>,
}

/// Escapes LIKE metacharacters so user input is matched literally
///
/// Postgres interprets `%`, `_`, and the default escape character `\` in
/// LIKE/ILIKE patterns; substring filters must treat them as plain text.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Event {
    /// Creates a new event in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the organizer does not exist or the database
    /// connection fails
    pub async fn create(pool: &PgPool, data: CreateEvent) -> Result<Self, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, location, date, organizer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, location, date, organizer_id,
                      created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.location)
        .bind(data.date)
        .bind(data.organizer_id)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Finds an event by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, location, date, organizer_id,
                   created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Lists events matching the given filter
    ///
    /// Builds the WHERE clause dynamically from the predicates that are
    /// present. Results are ordered by `(date, id)` for stable output.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool, filter: &EventFilter) -> Result<Vec<Self>, sqlx::Error> {
        let mut query = String::from(
            "SELECT e.id, e.title, e.description, e.location, e.date, e.organizer_id, \
             e.created_at, e.updated_at \
             FROM events e \
             JOIN users u ON u.id = e.organizer_id",
        );

        let mut clauses = Vec::new();
        let mut bind_count = 0;

        if filter.title.is_some() {
            bind_count += 1;
            clauses.push(format!("e.title ILIKE ${}", bind_count));
        }
        if filter.date_after.is_some() {
            bind_count += 1;
            clauses.push(format!("e.date >= ${}", bind_count));
        }
        if filter.date_before.is_some() {
            bind_count += 1;
            clauses.push(format!("e.date <= ${}", bind_count));
        }
        if filter.organizer_username.is_some() {
            bind_count += 1;
            clauses.push(format!("u.username ILIKE ${}", bind_count));
        }

        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY e.date, e.id");

        let mut q = sqlx::query_as::<_, Event>(&query);

        if let Some(ref title) = filter.title {
            q = q.bind(format!("%{}%", escape_like(title)));
        }
        if let Some(date_after) = filter.date_after {
            q = q.bind(date_after);
        }
        if let Some(date_before) = filter.date_before {
            q = q.bind(date_before);
        }
        if let Some(ref organizer_username) = filter.organizer_username {
            q = q.bind(format!("%{}%", escape_like(organizer_username)));
        }

        let events = q.fetch_all(pool).await?;

        Ok(events)
    }

    /// Updates an existing event
    ///
    /// Only non-None fields in `data` are updated. The `updated_at` timestamp
    /// is set to the current time.
    ///
    /// # Returns
    ///
    /// The updated event if found, None if the event doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateEvent,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE events SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.location.is_some() {
            bind_count += 1;
            query.push_str(&format!(", location = ${}", bind_count));
        }
        if data.date.is_some() {
            bind_count += 1;
            query.push_str(&format!(", date = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, title, description, location, date, \
             organizer_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Event>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(location) = data.location {
            q = q.bind(location);
        }
        if let Some(date) = data.date {
            q = q.bind(date);
        }

        let event = q.fetch_optional(pool).await?;

        Ok(event)
    }

    /// Deletes an event by ID
    ///
    /// Registrations for the event cascade with the row.
    ///
    /// # Returns
    ///
    /// True if an event was deleted, false if it didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
