use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        clan::{
            __path_create_clan, __path_delete_clan, __path_list_clans, __path_search_clans,
            create_clan, delete_clan, list_clans, search_clans,
        },
        health::{__path_health, health},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(title = "Vertigo Games - Clan API", version = "1.0.0"))]
pub struct ApiDoc;

/// Builds the application router with OpenAPI docs served at `/docs` and `/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        .routes(routes!(create_clan, list_clans))
        .routes(routes!(search_clans))
        .routes(routes!(delete_clan))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
