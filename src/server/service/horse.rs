//! Gallery horse service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::horse::HorseRepository,
    error::AppError,
    model::{
        horse::{CreateHorseParam, Horse, UpdateHorseParam},
        pagination::{PageParam, Paginated},
    },
    pipe::slug::normalize_slug,
};

pub struct HorseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HorseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists horses ordered by name.
    pub async fn list(&self, page: PageParam) -> Result<Paginated<Horse>, AppError> {
        let (horses, total) = HorseRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(horses, total, page))
    }

    /// Finds a horse by the page address taken from a request path.
    ///
    /// The address is normalized the same way stored addresses are, so lookups are
    /// case-insensitive. An address that cannot be normalized names no horse.
    ///
    /// # Returns
    /// - `Ok(Horse)` - The horse at that address
    /// - `Err(AppError::NotFound)` - No horse has that address
    pub async fn get_by_url(&self, url: &str) -> Result<Horse, AppError> {
        let not_found = || AppError::NotFound(format!("No horse at page address '{}'", url));

        let Ok(slug) = normalize_slug(url) else {
            return Err(not_found());
        };

        HorseRepository::new(self.db)
            .find_by_url(&slug)
            .await?
            .ok_or_else(not_found)
    }

    /// Lists a new horse.
    ///
    /// # Returns
    /// - `Ok(Horse)` - The created horse
    /// - `Err(AppError::Conflict)` - Another horse already uses the page address
    pub async fn create(&self, param: CreateHorseParam) -> Result<Horse, AppError> {
        let repo = HorseRepository::new(self.db);

        if let Some(url) = &param.url {
            ensure_url_free(&repo, url, None).await?;
        }

        let horse = repo.create(param).await?;

        tracing::info!(horse_id = horse.id, "Created horse");

        Ok(horse)
    }

    /// Edits a horse.
    ///
    /// # Returns
    /// - `Ok(Horse)` - The updated horse
    /// - `Err(AppError::NotFound)` - No horse with that ID
    /// - `Err(AppError::Conflict)` - Another horse already uses the new page address
    pub async fn update(&self, param: UpdateHorseParam) -> Result<Horse, AppError> {
        let repo = HorseRepository::new(self.db);
        let horse_id = param.id;

        if let Some(Some(url)) = &param.url {
            ensure_url_free(&repo, url, Some(horse_id)).await?;
        }

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Horse {} not found", horse_id)))
    }

    pub async fn delete(&self, horse_id: i32) -> Result<(), AppError> {
        if !HorseRepository::new(self.db).delete(horse_id).await? {
            return Err(AppError::NotFound(format!("Horse {} not found", horse_id)));
        }

        tracing::info!(horse_id, "Deleted horse");

        Ok(())
    }
}

async fn ensure_url_free(
    repo: &HorseRepository<'_>,
    url: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    if repo.url_in_use(url, exclude_id).await? {
        return Err(AppError::Conflict(format!(
            "Page address '{}' is already in use",
            url
        )));
    }
    Ok(())
}
