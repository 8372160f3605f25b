/// Event catalog endpoints
///
/// Listing and single-event reads are public; writes require authentication.
/// The listing accepts optional query predicates that compose with AND:
/// `title` (case-insensitive substring), `date_after`/`date_before`
/// (inclusive bounds), and `organizer_username` (case-insensitive substring).
///
/// # Endpoints
///
/// - `GET    /v1/events` - List events with filters
/// - `POST   /v1/events` - Create event
/// - `GET    /v1/events/:id` - Fetch event
/// - `PUT    /v1/events/:id` - Update event
/// - `DELETE /v1/events/:id` - Delete event

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use gatherly_shared::{
    auth::middleware::AuthContext,
    models::event::{CreateEvent, Event, EventFilter, UpdateEvent},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create event request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Optional venue or address
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    /// Calendar date the event takes place on
    pub date: NaiveDate,
}

/// Update event request
///
/// All fields optional; only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    pub date: Option<NaiveDate>,
}

/// List events
///
/// # Endpoint
///
/// ```text
/// GET /v1/events?title=conf&date_after=2025-06-01&date_before=2025-06-30&organizer_username=alice
/// ```
///
/// Absent filters are no-ops; date bounds are inclusive.
///
/// # Errors
///
/// - `500 Internal Server Error`: Server error
pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> ApiResult<Json<Vec<Event>>> {
    let events = Event::list(&state.db, &filter).await?;

    Ok(Json(events))
}

/// Create event
///
/// The authenticated caller becomes the organizer.
///
/// # Endpoint
///
/// ```text
/// POST /v1/events
/// Authorization: Bearer <jwt_token>
/// Content-Type: application/json
///
/// {
///   "title": "RustConf",
///   "description": "Annual Rust conference",
///   "location": "Portland",
///   "date": "2025-09-10"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Server error
pub async fn create_event(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    req.validate()?;

    let event = Event::create(
        &state.db,
        CreateEvent {
            title: req.title,
            description: req.description.unwrap_or_default(),
            location: req.location.unwrap_or_default(),
            date: req.date,
            organizer_id: auth.user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Fetch a single event
///
/// # Errors
///
/// - `404 Not Found`: No event with that id
/// - `500 Internal Server Error`: Server error
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Event>> {
    let event = Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

/// Update an event
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No event with that id
/// - `500 Internal Server Error`: Server error
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> ApiResult<Json<Event>> {
    req.validate()?;

    let event = Event::update(
        &state.db,
        id,
        UpdateEvent {
            title: req.title,
            description: req.description,
            location: req.location,
            date: req.date,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

/// Delete an event
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No event with that id
/// - `500 Internal Server Error`: Server error
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Event::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
