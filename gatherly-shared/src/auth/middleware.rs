/// Request authentication context
///
/// After the API's JWT middleware validates a bearer token, it inserts an
/// [`AuthContext`] into the request extensions. Handlers extract it with
/// Axum's `Extension` extractor:
///
/// ```ignore
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("User: {}", auth.username)
/// }
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::Claims;

/// Identity of the authenticated caller, derived from validated JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,

    /// Authenticated user's handle
    pub username: String,
}

impl AuthContext {
    /// Creates an auth context from validated claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "alice".to_string());

        let context = AuthContext::from_claims(&claims);

        assert_eq!(context.user_id, user_id);
        assert_eq!(context.username, "alice");
    }
}
