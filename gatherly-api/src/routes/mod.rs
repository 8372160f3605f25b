/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Account endpoints (register, login)
/// - `events`: Event catalog CRUD and filtered listing
/// - `registrations`: Event sign-up and the caller's registration list

pub mod auth;
pub mod events;
pub mod health;
pub mod registrations;
