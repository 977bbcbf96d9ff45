use sea_orm::Database;
use tracing::info;

use brewlog_auth::TokenValidator;
use brewlog_core::config::Config as _;

use brewlog_catalog::config::CatalogConfig;
use brewlog_catalog::infra::analyzer::OpenAiAnalyzer;
use brewlog_catalog::metrics::HttpMetrics;
use brewlog_catalog::router::{build_router, cors_layer};
use brewlog_catalog::state::AppState;

#[tokio::main]
async fn main() {
    brewlog_core::tracing::init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let analyzer = config.openai_api_key.as_ref().map(|key| {
        OpenAiAnalyzer::new(&config.openai_base_url, key, &config.openai_model)
    });
    if analyzer.is_none() {
        info!("no analyzer API key configured; preference analysis disabled");
    }

    let state = AppState {
        db,
        validator: TokenValidator::new(&config.jwt_secret),
        metrics: HttpMetrics::new(),
        analyzer,
        environment: config.environment.clone(),
    };

    let router = build_router(state, cors_layer(&config.cors_origin_list()));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
