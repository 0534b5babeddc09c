mod cli;
mod commands;
mod session;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config first: its logging level is the fallback directive.
    let config = session::load(&args);

    let level = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.as_directive().to_string()))
        .unwrap_or_else(|| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("mediashare={level}"))),
        )
        .init();

    tracing::info!("mediashare v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        mediashare_config::MediaShareConfig::default()
    });

    let command = args.command.clone();
    if let Err(e) = commands::run(command, config, &args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
