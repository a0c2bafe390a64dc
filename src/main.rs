use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use aws_config::BehaviorVersion;
use clap::Parser;
use ticket_intake::{
    config::{Config, StoreBackend},
    create_router,
    models::{
        db::SqliteStore,
        dynamodb::DynamoDbStore,
        sqs::SqsQueue,
        ticketsystem::{AppState, MessageQueue, RecordStore},
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a) Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // b) Config
    let config = Config::parse();

    // c) Clients, built once and shared by every request
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(endpoint) = &config.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let aws = loader.load().await;

    let store: Arc<dyn RecordStore> = match config.store_backend {
        StoreBackend::Dynamodb => Arc::new(DynamoDbStore::new(&aws, &config.table_name)),
        StoreBackend::Sqlite => {
            Arc::new(SqliteStore::new(&config.sqlite_url, &config.table_name).await?)
        }
    };
    let queue: Arc<dyn MessageQueue> = Arc::new(SqsQueue::new(&aws, &config.queue_url));
    info!(
        store = store.name(),
        table = %config.table_name,
        queue = queue.name(),
        queue_url = %config.queue_url,
        "Clients initialised"
    );

    // d) Router
    let app = create_router(AppState::new(store, queue));

    // e) Server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}/tickets{{,/submit}}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down");
}
