use axum::http::{HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level is used as the filter.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::ConfigErr)` - The configured filter could not be parsed or a
///   subscriber was already installed
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "RUST_LOG".to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application's Sqlite database.
///
/// The session cookie is the login token for the API.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the CORS layer, restricted to `CORS_ORIGIN` when configured.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let layer = match &config.cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;

            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods(methods)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    };

    Ok(layer)
}
