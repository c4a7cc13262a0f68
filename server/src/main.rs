mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = state::AppState::from_config(&config);
    tracing::info!(motion = state.motion.as_str(), "presentation hints selected");

    let app = match routes::leptos_app(state, config.leptos_config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
