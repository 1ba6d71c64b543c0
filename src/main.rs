use carshare::server::{
    config::Config, router, startup, state::AppState, util::jwt::JwtConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.environment);

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db.clone(), JwtConfig::from_config(&config));
    let app = router::app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        "Prague Carsharing API listening on {} ({:?})",
        listener.local_addr()?,
        config.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
