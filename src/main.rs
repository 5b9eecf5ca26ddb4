use std::{sync::Arc, time::Duration};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use user_accounts::{
    build_app,
    config::{Config, StorageConfig},
    domain::repositories::UserRepository,
    infrastructure::repositories::{
        in_memory::InMemoryUserRepository,
        mongo::{self, MongoUserRepository},
    },
    presentation::http::endpoints::root::ApiState,
};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_accounts=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_parse()?;
    let server_url = config.server_url();

    let (repo, client): (Arc<dyn UserRepository>, _) = match &config.storage {
        StorageConfig::Mongo {
            uri,
            database,
            collection,
        } => {
            let client = mongo::connect(uri).await?;
            tracing::info!(%database, %collection, "connected to MongoDB");
            let repo: Arc<dyn UserRepository> = MongoUserRepository::new(&client, database, collection);
            (repo, Some(client))
        }
        StorageConfig::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            (repo, None)
        }
    };

    let app = build_app(Arc::new(ApiState::new(repo)), server_url.clone());

    tracing::info!(%server_url, "Starting server");

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_TIMEOUT))
        .await?;

    if let Some(client) = client {
        client.shutdown().await;
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
