use std::env;

use tracing_subscriber::EnvFilter;

use tastetrail_api::config::{AppConfig, StorageConfig};
use tastetrail_api::router;
use tastetrail_api::seed::seed_catalogue;
use tastetrail_api::state::AppState;
use tastetrail_storage::objects::ObjectStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let config = AppConfig::from_env()?;

    let store = match &config.storage {
        StorageConfig::Local { data_dir } => {
            tokio::fs::create_dir_all(data_dir).await?;
            ObjectStore::local(data_dir.clone())
        }
        StorageConfig::S3 { bucket } => {
            let client = tastetrail_storage::client::build_client().await;
            ObjectStore::s3(client, bucket.clone())
        }
    };
    tracing::info!(backend = store.backend(), "document store ready");

    if config.seed {
        seed_catalogue(&store).await?;
    }

    let addr = format!("{}:{}", config.bind, config.port);
    let app = router(AppState::new(store, config));

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
