mod docs;
mod error;
mod planning;
mod state;

use crate::docs::docs_routes;
use crate::planning::routes::planning_routes;
use crate::state::AppState;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, serve};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info, warn};
use vetroute_planner::config::PlannerConfig;
use vetroute_providers::{config::env_or, route_optimization_client::RouteOptimizationClient};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = PlannerConfig::from_env()?;
    let optimizer = RouteOptimizationClient::from_env()?;
    if !optimizer.is_enabled() {
        warn!("VETROUTE_OPTIMIZER_URL is not set, routes will be ordered by zone weight");
    }

    let state = Arc::new(AppState { optimizer, config });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes())
        .nest_api_service("/planning", planning_routes(state))
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        let spec = serde_json::to_string_pretty(&api)?;
        std::fs::create_dir_all("schemas")?;
        std::fs::write("schemas/openapi.json", spec)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)));

    let address: String = env_or("VETROUTE_API_ADDR", String::from("127.0.0.1:8080"))?;
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {}", address);

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Vetroute Open API")
}
