use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use trivia_backend::{
    config::{get_config, init_config, StoreBackend},
    database::{
        pool::{create_pool, run_migrations},
        DynStore, MemoryStore, PgStore,
    },
    routes, telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    telemetry::init_tracing(config.log_format);

    let store: DynStore = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = create_pool(config).await?;
            run_migrations(&pool).await?;
            info!("Connected to PostgreSQL and applied migrations");
            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::with_default_categories())
        }
    };

    let app = routes::router(AppState::new(store));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
