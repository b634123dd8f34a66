// src/main.rs
use anyhow::Result;
use clap::Parser;
use job_tracker_health::{
    api::ApiClient,
    cli::Cli,
    health::{DisplayState, HealthChecker},
    ui::{App, Renderer},
};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the page.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("job_tracker_health=info".parse()?)
                .add_directive("hyper=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.resolve_config().await?;

    let client = ApiClient::new(&config.api)?;
    info!("Checking backend health at {}", client.base_url());
    let checker = Arc::new(HealthChecker::new(client, &config.health));

    let mut app = App::mount(&config.display, checker);

    tokio::select! {
        state = app.settled() => {
            if let DisplayState::Errored(failure) = &state {
                warn!(kind = %failure.kind, "backend health check did not succeed");
            }
        }
        _ = shutdown_signal() => {}
    }

    let renderer = Renderer::new(config.display.color);
    print!("{}", renderer.render(&app.render()));

    app.unmount().await;
    Ok(())
}

// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received before the health check resolved");
}
