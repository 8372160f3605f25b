/// Event registration model
///
/// Records a user's intent to attend an event. The `(user_id, event_id)` pair
/// is unique at the storage level, and [`EventRegistration::create`] inserts
/// with `ON CONFLICT DO NOTHING` so the duplicate check and the write are a
/// single atomic statement. Concurrent requests for the same pair cannot both
/// insert; the loser observes `None` and reports the duplicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A user's registration for an event
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRegistration {
    /// Unique registration ID (UUID v4)
    pub id: Uuid,

    /// Registered user
    pub user_id: Uuid,

    /// Event the user registered for
    pub event_id: Uuid,

    /// When the registration was recorded
    pub registered_at: DateTime<Utc>,
}

/// A registration joined with its event, as returned to the registered user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistrationSummary {
    /// Event the user registered for
    pub event_id: Uuid,

    /// Title of that event
    pub title: String,

    /// When the registration was recorded
    pub registered_at: DateTime<Utc>,
}

impl EventRegistration {
    /// Atomically inserts a registration for `(user_id, event_id)`
    ///
    /// # Returns
    ///
    /// The new registration, or `None` if the user is already registered for
    /// the event.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or event does not exist (foreign key
    /// violation) or the database connection fails
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let registration = sqlx::query_as::<_, EventRegistration>(
            r#"
            INSERT INTO event_registrations (user_id, event_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, event_id) DO NOTHING
            RETURNING id, user_id, event_id, registered_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(pool)
        .await?;

        Ok(registration)
    }

    /// Checks whether a registration exists for `(user_id, event_id)`
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn exists(
        pool: &PgPool,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM event_registrations
                WHERE user_id = $1 AND event_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;

        Ok(found)
    }

    /// Lists all registrations for a user, joined with their event titles
    ///
    /// Ordered by registration time, oldest first. A user with no
    /// registrations gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<RegistrationSummary>, sqlx::Error> {
        let registrations = sqlx::query_as::<_, RegistrationSummary>(
            r#"
            SELECT r.event_id, e.title, r.registered_at
            FROM event_registrations r
            JOIN events e ON e.id = r.event_id
            WHERE r.user_id = $1
            ORDER BY r.registered_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(registrations)
    }

    /// Counts registrations for an event
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn count_for_event(pool: &PgPool, event_id: Uuid) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM event_registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_summary_serializes_expected_fields() {
        let summary = RegistrationSummary {
            event_id: Uuid::new_v4(),
            title: "RustConf".to_string(),
            registered_at: Utc::now(),
        };

        let json = serde_json::to_value(&summary).expect("serializes");
        assert!(json.get("event_id").is_some());
        assert!(json.get("title").is_some());
        assert!(json.get("registered_at").is_some());
        assert_eq!(json.as_object().map(|o| o.len()), Some(3));
    }
}
