use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::clan::ClanRepository,
    error::AppError,
    model::clan::{Clan, ClanFilter, ClanSearchParams, CreateClanParams},
};

pub struct ClanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new clan
    pub async fn create(&self, params: CreateClanParams) -> Result<Clan, AppError> {
        let txn = self.db.begin().await?;

        let clan = ClanRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::debug!("Created clan {} ({})", clan.id, clan.name);

        Ok(clan)
    }

    /// Lists clans newest first, optionally filtered by region
    pub async fn list(&self, filter: ClanFilter) -> Result<Vec<Clan>, AppError> {
        let txn = self.db.begin().await?;

        let clans = ClanRepository::new(&txn)
            .get_all(filter.region.as_deref())
            .await?;

        txn.commit().await?;

        Ok(clans)
    }

    /// Searches clans by case-insensitive name substring, newest first
    pub async fn search(&self, params: ClanSearchParams) -> Result<Vec<Clan>, AppError> {
        let txn = self.db.begin().await?;

        let clans = ClanRepository::new(&txn).search(&params.name).await?;

        txn.commit().await?;

        Ok(clans)
    }

    /// Deletes a clan
    /// Returns the deleted clan, or None if no clan has this id
    pub async fn delete(&self, id: Uuid) -> Result<Option<Clan>, AppError> {
        let txn = self.db.begin().await?;
        let repo = ClanRepository::new(&txn);

        let Some(clan) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        repo.delete(clan.id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted clan {} ({})", clan.id, clan.name);

        Ok(Some(clan))
    }
}
