//! tb-replay entry point

use anyhow::{Context, Result};
use clap::Parser;
use tb_core::ArcballConfig;
use tb_frontend::{Args, Session, replay};
use tb_renderer::HelperConfig;

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Logs go to stderr so the report can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tb_frontend=info,tb_core=info,tb_renderer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let session = Session::load(&args.session)
        .with_context(|| format!("failed to load session {}", args.session.display()))?;

    let arcball_config = match &args.arcball_config {
        Some(path) => ArcballConfig::load(path)
            .with_context(|| format!("failed to load arcball config {}", path.display()))?,
        None => ArcballConfig::default(),
    };
    let helper_config = match &args.helper_config {
        Some(path) => HelperConfig::load(path)
            .with_context(|| format!("failed to load helper config {}", path.display()))?,
        None => HelperConfig::default(),
    };

    let report = replay(&session, arcball_config, helper_config);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
