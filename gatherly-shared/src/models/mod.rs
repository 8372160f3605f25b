/// Database models for Gatherly
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts
/// - `event`: Events with filterable listing
/// - `registration`: A user's registration for an event
///
/// # Example
///
/// ```no_run
/// use gatherly_shared::models::user::{CreateUser, User};
/// use gatherly_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod event;
pub mod registration;
pub mod user;
