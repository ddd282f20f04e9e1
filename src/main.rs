use habit_tracker::clock::{Clock, FixedClock, LocalClock};
use habit_tracker::{load_data, router, AppState, Config};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let clock: Arc<dyn Clock> = match config.pinned_today {
        Some(today) => {
            info!("today pinned to {today}");
            Arc::new(FixedClock(today))
        }
        None => Arc::new(LocalClock),
    };

    let data = load_data(&config.data_path).await;
    let state = AppState::new(config.data_path.clone(), data, clock, config.epoch);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr} (grid starts {})", config.epoch);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
