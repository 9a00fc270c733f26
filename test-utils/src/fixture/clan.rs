//! Clan fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::clan;
use uuid::Uuid;

/// Default test clan name.
pub const DEFAULT_NAME: &str = "Test Clan";

/// Default test clan region.
pub const DEFAULT_REGION: &str = "EU";

/// Default creation timestamp, 2026-01-01T00:00:00Z.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a clan entity model with default values.
///
/// The model is not inserted into the database. A fresh random id is generated for each
/// call so that fixtures can be inserted side by side.
///
/// # Default Values
/// - name: `"Test Clan"`
/// - region: `"EU"`
/// - created_at: `2026-01-01T00:00:00Z`
pub fn entity() -> clan::Model {
    entity_builder().build()
}

/// Creates a clan entity builder for customization.
pub fn entity_builder() -> ClanEntityBuilder {
    ClanEntityBuilder::default()
}

/// Builder for creating customized clan entity models.
pub struct ClanEntityBuilder {
    id: Uuid,
    name: String,
    region: String,
    created_at: DateTime<Utc>,
}

impl Default for ClanEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            created_at: default_created_at(),
        }
    }
}

impl ClanEntityBuilder {
    /// Sets the clan ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the clan name.
    ///
    /// # Arguments
    /// - `name` - Display name for the clan
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the region code.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the clan entity model.
    pub fn build(self) -> clan::Model {
        clan::Model {
            id: self.id,
            name: self.name,
            region: self.region,
            created_at: self.created_at,
        }
    }
}
