use utoipa::OpenApi;

/// Top-level OpenAPI document for the vectorize API.
///
/// Served by the documentation routes (`/`, `/swagger-ui`) mounted in
/// `axum_helpers::create_router`.
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Vectorize API",
        version = "0.1.0",
        description = "Embeds text chunks, stores them in PostgreSQL, and indexes the vectors in Qdrant"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/vectorize", api = domain_chunks::VectorizeApiDoc)
    )
)]
pub struct ApiDoc;
