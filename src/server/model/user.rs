//! User domain model.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// A shop customer, identified by the mobile number they verified with an OTP.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            phone_number: self.phone_number,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            phone_number: entity.phone_number,
            created_at: entity.created_at,
        }
    }
}
