//! Login session domain model.

use chrono::{DateTime, Utc};

use crate::{model::auth::SessionDto, server::model::user::User};

/// A server-side login session addressed by an opaque token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub token: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            id: entity.id,
            token: entity.token,
            user_id: entity.user_id,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Parameters for opening a session after a successful OTP verification.
#[derive(Debug, Clone)]
pub struct CreateSessionParam {
    pub token: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

/// A freshly opened session together with the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub session: Session,
    pub user: User,
}

impl LoginSession {
    pub fn into_dto(self) -> SessionDto {
        SessionDto {
            session_id: self.session.token,
            expires_at: self.session.expires_at,
            user: self.user.into_dto(),
        }
    }
}
