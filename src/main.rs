//! greetcard — greeting card generator over an OpenAI-compatible LLM.
//! POST text in, formatted HTML greeting out; the last one is kept in memory.

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use greetcard::ai::{self, AiConfig, OpenAiCompletion};
use greetcard::{api, AppState};

#[derive(Parser)]
#[command(name = "greetcard", version, about = "Greeting card generator service")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "GREETCARD_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "GREETCARD_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let completion = match AiConfig::from_env().and_then(OpenAiCompletion::new) {
        Ok(c) => {
            info!("OpenAI API key loaded successfully");
            c
        }
        Err(e) => {
            error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };
    info!(model = ai::MODEL, temperature = ai::TEMPERATURE, "completion client initialized");

    let state = AppState::new(Arc::new(completion));
    let app = api::router(state);

    let addr = format!("{}:{}", args.host, args.port);
    info!(version = env!("CARGO_PKG_VERSION"), addr = %addr, "greetcard starting");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(error = %e, addr = %addr, "failed to bind address");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutting down");
}
