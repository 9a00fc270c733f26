//! Clan data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, ExprTrait, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbBackend, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::clan::{Clan, CreateClanParams};

/// Escape character used in LIKE patterns built from user input.
const LIKE_ESCAPE: char = '\\';

/// Repository providing database operations for clans.
///
/// Holds a reference to any SeaORM connection: the pool itself, or a transaction opened by
/// the service layer for the current request.
pub struct ClanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClanRepository<'a, C> {
    /// Creates a new ClanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `ClanRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new clan.
    ///
    /// The id and creation timestamp are generated here, immediately before the insert.
    ///
    /// # Arguments
    /// - `params` - Validated clan name and region
    ///
    /// # Returns
    /// - `Ok(Clan)` - The stored clan
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateClanParams) -> Result<Clan, DbErr> {
        let entity = entity::clan::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            region: ActiveValue::Set(params.region),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Clan::from_entity(entity))
    }

    /// Gets all clans, newest first, optionally restricted to one region.
    ///
    /// # Arguments
    /// - `region` - Exact region code to match, or `None` for every region
    ///
    /// # Returns
    /// - `Ok(Vec<Clan>)` - Clans ordered by `created_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, region: Option<&str>) -> Result<Vec<Clan>, DbErr> {
        let mut query = entity::prelude::Clan::find();

        if let Some(region) = region {
            query = query.filter(entity::clan::Column::Region.eq(region));
        }

        let entities = query
            .order_by_desc(entity::clan::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Clan::from_entity).collect())
    }

    /// Finds clans whose name contains `name`, ignoring case, newest first.
    ///
    /// LIKE wildcards in `name` are escaped and match literally. Case folding is left to the
    /// database so the column and the term are folded by the same rules.
    ///
    /// # Arguments
    /// - `name` - Substring to look for
    ///
    /// # Returns
    /// - `Ok(Vec<Clan>)` - Matching clans ordered by `created_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, name: &str) -> Result<Vec<Clan>, DbErr> {
        let entities = entity::prelude::Clan::find()
            .filter(name_contains(self.db.get_database_backend(), name))
            .order_by_desc(entity::clan::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Clan::from_entity).collect())
    }

    /// Finds a clan by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Clan))` - Clan found
    /// - `Ok(None)` - No clan with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Clan>, DbErr> {
        let entity = entity::prelude::Clan::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Clan::from_entity))
    }

    /// Deletes a clan by its id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed, 0 or 1
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Clan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Case-insensitive substring condition on the clan name.
///
/// PostgreSQL uses `ILIKE`, which folds case by the database locale. SQLite and MySQL compare
/// with `LIKE`, which is already case-insensitive there (ASCII only on SQLite).
fn name_contains(backend: DbBackend, name: &str) -> Condition {
    let pattern = LikeExpr::new(format!("%{}%", escape_like(name))).escape(LIKE_ESCAPE);
    let column = Expr::col(entity::clan::Column::Name);

    let expr = match backend {
        DbBackend::Postgres => column.ilike(pattern),
        _ => column.like(pattern),
    };

    Condition::all().add(expr)
}

/// Escapes LIKE metacharacters so `value` matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    escaped
}
