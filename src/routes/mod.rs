mod home;
mod pagination;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use pagination::PaginationWindowResponse;

// Define the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // General endpoints
        home::root,
        // Pagination endpoints
        pagination::pagination_window,
    ),
    components(
        schemas(
            pagination::PaginationWindowResponse,
            crate::pagination::PageDescriptor,
            crate::links::PageLink,
            crate::links::LinkKind,
        )
    ),
    tags(
        (name = "General", description = "General API information"),
        (name = "Pagination", description = "Pagination window for GOV.UK style result lists")
    ),
    info(
        title = "Portal Pagination API",
        version = "0.1.0",
        description = "Computes pagination strips (page numbers, gaps, previous/next links) for the grant portals",
    )
)]
pub struct ApiDoc;

pub fn create_routes() -> Router {
    // Swagger UI
    let swagger_router: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into();

    let app_routes = Router::new()
        .route("/", get(home::root))
        .route("/pagination", get(pagination::pagination_window))
        .fallback(pagination::not_found);

    Router::new()
        .merge(swagger_router)
        .merge(app_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
