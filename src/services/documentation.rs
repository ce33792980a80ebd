use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the poker league server.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::league::get_league,
        crate::routes::players::get_score,
        crate::routes::players::record_win,
        crate::routes::game::game_page,
        crate::routes::websocket::ws_handler,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::league::PlayerDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "league", description = "League table and player wins"),
        (name = "game", description = "Live game sessions and blind alerts"),
    )
)]
pub struct ApiDoc;
