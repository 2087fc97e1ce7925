use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Resolves a session identifier to the logged-in user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session_id: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    /// Creates a guard for the identifier produced by the `SessionId` extractor.
    pub fn new(db: &'a DatabaseConnection, session_id: Option<&'a str>) -> Self {
        Self { db, session_id }
    }

    /// Requires a live session and returns its user.
    ///
    /// An expired session is deleted before the error is returned so the token
    /// cannot be retried.
    ///
    /// # Returns
    /// - `Ok(User)` - The session is live and its user exists
    /// - `Err(AuthError::NotAuthenticated)` - No identifier, unknown token, or the user is gone
    /// - `Err(AuthError::SessionExpired)` - The session's expiry has passed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = self.session_id else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let session_repo = SessionRepository::new(self.db);
        let Some(session) = session_repo.find_by_token(token).await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        if session.is_expired(Utc::now()) {
            session_repo.delete(session.id).await?;
            return Err(AuthError::SessionExpired {
                session_id: session.id,
            }
            .into());
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(session.user_id)
            .await?
        else {
            return Err(AuthError::NotAuthenticated.into());
        };

        Ok(user)
    }
}
