//! Clan factory for creating test clan rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test clans with customizable fields.
///
/// Defaults are sourced from `fixture::clan` with a unique name so that multiple clans can
/// be created in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::clan::ClanFactory;
///
/// let clan = ClanFactory::new(&db)
///     .name("Dragons")
///     .region("TR")
///     .build()
///     .await?;
/// ```
pub struct ClanFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::clan::Model,
}

impl<'a> ClanFactory<'a> {
    /// Creates a new ClanFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::clan::entity_builder()
            .name(format!("Clan {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the clan name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the region code.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.entity.region = region.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// # Arguments
    /// - `created_at` - Timestamp stored in the `created_at` column
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Inserts the clan into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted clan entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::clan::Model, DbErr> {
        entity::clan::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            region: ActiveValue::Set(self.entity.region),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clan with default values.
pub async fn create_clan(db: &DatabaseConnection) -> Result<entity::clan::Model, DbErr> {
    ClanFactory::new(db).build().await
}
