//! Gallery horse domain model.

use chrono::{DateTime, Utc};

use crate::model::horse::{CreateHorseDto, HorseDto, UpdateHorseDto};

/// A horse listed in the gallery, optionally reachable by a page address.
#[derive(Debug, Clone, PartialEq)]
pub struct Horse {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Horse {
    pub fn into_dto(self) -> HorseDto {
        HorseDto {
            id: self.id,
            name: self.name,
            url: self.url,
            description: self.description,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::horse::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            description: entity.description,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for listing a new horse.
///
/// `url` is already normalized; `None` means the horse has no page address.
#[derive(Debug, Clone)]
pub struct CreateHorseParam {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub price: i64,
}

impl CreateHorseParam {
    /// Converts a request body that already went through the URL slug pipe.
    ///
    /// An empty `url` means the horse has no page address.
    pub fn from_dto(dto: CreateHorseDto) -> Self {
        Self {
            name: dto.name,
            url: dto.url.filter(|url| !url.is_empty()),
            description: dto.description,
            price: dto.price,
        }
    }
}

/// Parameters for editing a horse; `None` fields are left unchanged.
///
/// `url: Some(None)` clears the page address.
#[derive(Debug, Clone, Default)]
pub struct UpdateHorseParam {
    pub id: i32,
    pub name: Option<String>,
    pub url: Option<Option<String>>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

impl UpdateHorseParam {
    /// Converts a request body that already went through the URL slug pipe.
    ///
    /// An absent `url` keeps the stored address, an empty one clears it.
    pub fn from_dto(id: i32, dto: UpdateHorseDto) -> Self {
        Self {
            id,
            name: dto.name,
            url: dto.url.map(|url| Some(url).filter(|url| !url.is_empty())),
            description: dto.description,
            price: dto.price,
        }
    }
}
