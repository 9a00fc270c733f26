//! Clan domain model and operation parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::clan::{ClanCreatedDto, ClanDeletedDto, ClanDto, CreateClanDto, ListClansQuery},
    server::error::validation::ValidationError,
};

pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 255;
pub const REGION_MIN_LEN: usize = 2;
pub const REGION_MAX_LEN: usize = 4;
pub const SEARCH_MIN_LEN: usize = 3;

pub const CLAN_CREATED_MESSAGE: &str = "Clan created successfully.";
pub const CLAN_DELETED_MESSAGE: &str = "Clan deleted successfully.";
pub const CLAN_NOT_FOUND_MESSAGE: &str = "Clan not found";

/// A stored clan.
#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

impl Clan {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::clan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            region: entity.region,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ClanDto {
        ClanDto {
            id: self.id,
            name: self.name,
            region: self.region,
            created_at: self.created_at,
        }
    }

    pub fn into_created_dto(self) -> ClanCreatedDto {
        ClanCreatedDto {
            id: self.id,
            message: CLAN_CREATED_MESSAGE.to_string(),
        }
    }

    pub fn into_deleted_dto(self) -> ClanDeletedDto {
        ClanDeletedDto {
            id: self.id,
            message: CLAN_DELETED_MESSAGE.to_string(),
        }
    }
}

/// Validated parameters for creating a clan.
///
/// `id` and `created_at` are assigned by the repository at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClanParams {
    pub name: String,
    pub region: String,
}

impl CreateClanParams {
    /// Validates a create request body.
    ///
    /// # Returns
    /// - `Ok(CreateClanParams)` - Name is 1-255 and region 2-4 characters long
    /// - `Err(ValidationError)` - One entry per field that is out of bounds
    pub fn from_dto(dto: CreateClanDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        check_length(
            &mut errors,
            &["body", "name"],
            &dto.name,
            NAME_MIN_LEN,
            Some(NAME_MAX_LEN),
        );
        check_length(
            &mut errors,
            &["body", "region"],
            &dto.region,
            REGION_MIN_LEN,
            Some(REGION_MAX_LEN),
        );

        errors.into_result()?;

        Ok(Self {
            name: dto.name,
            region: dto.region,
        })
    }
}

/// Optional filters for listing clans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClanFilter {
    /// Exact region match; `None` lists every region.
    pub region: Option<String>,
}

impl ClanFilter {
    /// An empty `region` query value is treated the same as an absent one.
    pub fn from_query(query: ListClansQuery) -> Self {
        Self {
            region: query.region.filter(|region| !region.is_empty()),
        }
    }
}

/// Validated parameters for a case-insensitive name search.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanSearchParams {
    pub name: String,
}

impl ClanSearchParams {
    /// Validates the `name` search term, which must be at least 3 characters.
    pub fn new(name: String) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        check_length(&mut errors, &["query", "name"], &name, SEARCH_MIN_LEN, None);
        errors.into_result()?;

        Ok(Self { name })
    }
}

/// Records a field error when `value` has fewer than `min` or more than `max` characters.
fn check_length(
    errors: &mut ValidationError,
    loc: &[&str],
    value: &str,
    min: usize,
    max: Option<usize>,
) {
    let len = value.chars().count();

    if len < min {
        errors.push(
            loc,
            format!("String should have at least {} {}", min, plural(min)),
        );
    } else if let Some(max) = max.filter(|max| len > *max) {
        errors.push(
            loc,
            format!("String should have at most {} {}", max, plural(max)),
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "character"
    } else {
        "characters"
    }
}
