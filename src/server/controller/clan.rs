use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        clan::{
            ClanCreatedDto, ClanDeletedDto, ClanDto, CreateClanDto, ListClansQuery,
            SearchClansQuery,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::clan::{
            ClanFilter, ClanSearchParams, CreateClanParams, CLAN_NOT_FOUND_MESSAGE,
        },
        service::clan::ClanService,
        state::AppState,
    },
};

/// Tag for grouping clan endpoints in OpenAPI documentation
pub static CLAN_TAG: &str = "clan";

/// Create a new clan.
///
/// Validates the name (1-255 characters) and region (2-4 characters) and stores the clan.
/// The id and creation timestamp are generated server-side.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Clan creation data, or the reason the body could not be parsed
///
/// # Returns
/// - `201 Created` - Clan stored, body contains its id
/// - `422 Unprocessable Entity` - Malformed body or out-of-bounds field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/clans",
    tag = CLAN_TAG,
    request_body = CreateClanDto,
    responses(
        (status = 201, description = "Successfully created clan", body = ClanCreatedDto),
        (status = 422, description = "Invalid clan data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_clan(
    State(state): State<AppState>,
    payload: Result<Json<CreateClanDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::single(&["body"], rejection.body_text()))?;

    let params = CreateClanParams::from_dto(payload)?;

    let service = ClanService::new(&state.db);
    let clan = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(clan.into_created_dto())))
}

/// List clans, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `region` filter, matched exactly
///
/// # Returns
/// - `200 OK` - Array of clans ordered by creation time descending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clans",
    tag = CLAN_TAG,
    params(ListClansQuery),
    responses(
        (status = 200, description = "Successfully retrieved clans", body = [ClanDto]),
        (status = 422, description = "Malformed query string", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clans(
    State(state): State<AppState>,
    query: Result<Query<ListClansQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) =
        query.map_err(|rejection| ValidationError::single(&["query"], rejection.body_text()))?;

    let service = ClanService::new(&state.db);
    let clans = service.list(ClanFilter::from_query(query)).await?;

    let clans: Vec<ClanDto> = clans.into_iter().map(|clan| clan.into_dto()).collect();

    Ok((StatusCode::OK, Json(clans)))
}

/// Search clans by name.
///
/// Case-insensitive substring match on the clan name. The search term must be at least
/// three characters long.
///
/// # Returns
/// - `200 OK` - Array of matching clans ordered by creation time descending
/// - `422 Unprocessable Entity` - `name` missing or shorter than three characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clans/search",
    tag = CLAN_TAG,
    params(SearchClansQuery),
    responses(
        (status = 200, description = "Successfully searched clans", body = [ClanDto]),
        (status = 422, description = "Invalid search term", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_clans(
    State(state): State<AppState>,
    query: Result<Query<SearchClansQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query
        .map_err(|rejection| ValidationError::single(&["query", "name"], rejection.body_text()))?;

    let params = ClanSearchParams::new(query.name)?;

    let service = ClanService::new(&state.db);
    let clans = service.search(params).await?;

    let clans: Vec<ClanDto> = clans.into_iter().map(|clan| clan.into_dto()).collect();

    Ok((StatusCode::OK, Json(clans)))
}

/// Delete a clan by id.
///
/// An id that is not a valid UUID cannot identify a clan and is reported as not found.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Clan id from the path
///
/// # Returns
/// - `200 OK` - Clan deleted, body contains its id
/// - `404 Not Found` - No clan with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/clans/{id}",
    tag = CLAN_TAG,
    params(
        ("id" = String, Path, description = "Clan id (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted clan", body = ClanDeletedDto),
        (status = 404, description = "Clan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_clan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound(CLAN_NOT_FOUND_MESSAGE.to_string());

    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;

    let service = ClanService::new(&state.db);
    let clan = service.delete(id).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(clan.into_deleted_dto())))
}
