//! Horse factory for creating gallery entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test horses with customizable fields.
///
/// Defaults:
/// - name: `"Horse {id}"`
/// - url: `"horse-{id}"`
/// - description: `None`
/// - price: `1000`
pub struct HorseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    url: Option<String>,
    description: Option<String>,
    price: i64,
}

impl<'a> HorseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Horse {}", id),
            url: Some(format!("horse-{}", id)),
            description: None,
            price: 1000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(mut self, url: Option<&str>) -> Self {
        self.url = url.map(str::to_string);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::horse::Model, DbErr> {
        let now = Utc::now();
        entity::horse::ActiveModel {
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a horse with default values.
pub async fn create_horse(db: &DatabaseConnection) -> Result<entity::horse::Model, DbErr> {
    HorseFactory::new(db).build().await
}
