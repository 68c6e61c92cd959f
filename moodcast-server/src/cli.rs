use std::path::PathBuf;

use clap::Parser;
use moodcast_core::Config;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{routes, state::AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "moodcast-server", version, about = "Weather-and-mood dashboard server")]
pub struct Cli {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. "127.0.0.1:8787". Takes precedence over the
    /// config file and MOODCAST_BIND.
    #[arg(long)]
    pub bind: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "moodcast_server=debug,tower_http=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let config = Config::load(self.config.as_deref())?;
        let addr = self.bind.unwrap_or_else(|| config.bind_addr().to_string());

        info!(
            provider = %config.provider_kind()?,
            policy = config.fallback_policy()?.as_str(),
            "configuration loaded"
        );

        let state = AppState::from_config(&config)?;

        let app = routes::create_router(state).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr).await?;
        info!("listening on http://{addr}");

        axum::serve(listener, app).await?;

        Ok(())
    }
}
