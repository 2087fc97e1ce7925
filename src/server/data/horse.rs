//! Horse data repository for the gallery.

use crate::server::model::horse::{CreateHorseParam, Horse, UpdateHorseParam};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for gallery horses.
pub struct HorseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HorseRepository<'a> {
    /// Creates a new HorseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HorseRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new horse.
    ///
    /// # Arguments
    /// - `param` - Horse fields with an already normalized page address
    ///
    /// # Returns
    /// - `Ok(Horse)` - The created horse
    /// - `Err(DbErr)` - Database error during insert, including a duplicate url
    pub async fn create(&self, param: CreateHorseParam) -> Result<Horse, DbErr> {
        let now = Utc::now();
        let entity = entity::horse::ActiveModel {
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Horse::from_entity(entity))
    }

    /// Applies the provided fields to an existing horse.
    ///
    /// Fields left as `None` in the parameters keep their stored value; `updated_at`
    /// is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Horse))` - The updated horse
    /// - `Ok(None)` - No horse with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateHorseParam) -> Result<Option<Horse>, DbErr> {
        let Some(existing) = entity::prelude::Horse::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(url) = param.url {
            active.url = ActiveValue::Set(url);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Horse::from_entity(entity)))
    }

    /// Deletes a horse by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The horse was deleted
    /// - `Ok(false)` - No horse with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, horse_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Horse::delete_by_id(horse_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds a horse by its normalized page address.
    pub async fn find_by_url(&self, url: &str) -> Result<Option<Horse>, DbErr> {
        let entity = entity::prelude::Horse::find()
            .filter(entity::horse::Column::Url.eq(url))
            .one(self.db)
            .await?;

        Ok(entity.map(Horse::from_entity))
    }

    /// Checks whether a page address is used by a horse other than `exclude_id`.
    ///
    /// # Arguments
    /// - `url` - Normalized page address
    /// - `exclude_id` - Horse being edited, ignored in the check
    ///
    /// # Returns
    /// - `Ok(true)` - Another horse already uses the address
    /// - `Ok(false)` - The address is free
    /// - `Err(DbErr)` - Database error during count
    pub async fn url_in_use(&self, url: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Horse::find().filter(entity::horse::Column::Url.eq(url));

        if let Some(id) = exclude_id {
            query = query.filter(entity::horse::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets horses ordered by name with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of horses per page
    ///
    /// # Returns
    /// - `Ok((horses, total))` - Horses for the requested page and the total horse count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Horse>, u64), DbErr> {
        let paginator = entity::prelude::Horse::find()
            .order_by_asc(entity::horse::Column::Name)
            .order_by_asc(entity::horse::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let horses = entities.into_iter().map(Horse::from_entity).collect();

        Ok((horses, total))
    }
}
