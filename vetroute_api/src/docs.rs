use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

const OPENAPI_JSON: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Vetroute planning API";

/// Interactive docs, both reading the generated document at [`OPENAPI_JSON`].
pub fn docs_routes() -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| op.description("Pickup planning endpoints, Scalar flavour."),
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON)
                    .with_title(DOCS_TITLE)
                    .axum_handler(),
                |op| op.description("Pickup planning endpoints, Swagger flavour."),
            ),
        )
        .route("/private/api.json", get(serve_openapi));

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
