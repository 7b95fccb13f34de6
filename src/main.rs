mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::storage::AnswerFileStore, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::cors_layer(&config)?;
    let file_store = AnswerFileStore::new(config.media_root.clone());

    let app = router::router()
        .with_state(AppState::new(db, file_store))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
