/// Authentication utilities for Gatherly
///
/// This module provides the building blocks for the identity layer:
///
/// - `password`: Argon2id password hashing and verification
/// - `jwt`: HS256 access-token creation and validation
/// - `middleware`: The `AuthContext` injected into authenticated requests
///
/// # Example
///
/// ```
/// use gatherly_shared::auth::{jwt, password};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = password::hash_password("Sup3r$ecret!")?;
/// assert!(password::verify_password("Sup3r$ecret!", &hash)?);
///
/// let claims = jwt::Claims::new(Uuid::new_v4(), "alice".to_string());
/// let token = jwt::create_token(&claims, "secret-key-that-is-32-bytes-long!!")?;
/// let validated = jwt::validate_token(&token, "secret-key-that-is-32-bytes-long!!")?;
/// assert_eq!(validated.username, "alice");
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
