/// Event registration endpoints
///
/// Records a user's intent to attend an event and lists the caller's own
/// registrations. A successful sign-up triggers a confirmation email inside
/// the request; a send failure is surfaced to the caller while the
/// registration row stays in place.
///
/// # Endpoints
///
/// - `POST /v1/events/:id/register` - Register the caller for an event
/// - `GET  /v1/my-registrations` - List the caller's registrations

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use gatherly_shared::{
    auth::middleware::AuthContext,
    models::{
        event::Event,
        registration::{EventRegistration, RegistrationSummary},
        user::User,
    },
};
use serde::Serialize;
use uuid::Uuid;

/// Register-to-event response
#[derive(Debug, Serialize)]
pub struct RegisterToEventResponse {
    /// Human-readable confirmation
    pub detail: String,
}

/// Register the caller for an event
///
/// # Endpoint
///
/// ```text
/// POST /v1/events/:id/register
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Response
///
/// ```json
/// { "detail": "User alice registered for event RustConf" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Already registered for this event
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No event with that id
/// - `500 Internal Server Error`: Confirmation email failed (the
///   registration itself has been recorded) or other server error
pub async fn register_to_event(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<RegisterToEventResponse>)> {
    // Look up the event first so a bad id never writes anything
    let event = Event::find_by_id(&state.db, event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User account no longer exists".to_string()))?;

    // Single atomic insert; the unique constraint on (user, event) decides
    // duplicates, so concurrent sign-ups cannot both succeed
    let registration = EventRegistration::create(&state.db, user.id, event.id).await?;
    if registration.is_none() {
        return Err(ApiError::BadRequest("Already registered".to_string()));
    }

    // The registration is committed at this point; a send failure surfaces
    // to the caller but does not roll it back
    if let Err(err) = state
        .mailer
        .send_registration_confirmation(&user.email, &user.username, &event.title)
        .await
    {
        tracing::error!(
            user_id = %user.id,
            event_id = %event.id,
            error = %err,
            "Confirmation email failed after registration was recorded"
        );
        return Err(err.into());
    }

    Ok((
        StatusCode::CREATED,
        Json(RegisterToEventResponse {
            detail: format!(
                "User {} registered for event {}",
                user.username, event.title
            ),
        }),
    ))
}

/// List the caller's registrations
///
/// # Endpoint
///
/// ```text
/// GET /v1/my-registrations
/// Authorization: Bearer <jwt_token>
/// ```
///
/// # Response
///
/// ```json
/// [
///   {
///     "event_id": "uuid",
///     "title": "RustConf",
///     "registered_at": "2025-06-01T12:00:00Z"
///   }
/// ]
/// ```
///
/// A caller with no registrations gets an empty list.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Server error
pub async fn my_registrations(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<RegistrationSummary>>> {
    let registrations = EventRegistration::list_for_user(&state.db, auth.user_id).await?;

    Ok(Json(registrations))
}
