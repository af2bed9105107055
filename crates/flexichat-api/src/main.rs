//! FlexiChat CLI and REST API entry point.
//!
//! Binary name: `flexichat`
//!
//! Parses CLI arguments, loads the memory record and config, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,flexichat=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "flexichat", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { listen } => {
            let addr = listen.unwrap_or_else(|| state.config.listen_addr.clone());
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  FlexiChat API listening on {}",
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Chat => {
            cli::chat::run_chat(&state).await?;
        }

        Commands::History => {
            cli::memory::show_history(&state, cli.json).await?;
        }

        Commands::Reset { force } => {
            cli::memory::reset_memory(&state, force, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
