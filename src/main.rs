use anyhow::{Context, Result};
use logzilla::cli::{Cli, USAGE};
use logzilla::config::Config;
use logzilla::pipeline;
use std::path::PathBuf;
use tracing::{Level, error};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("logzilla=info")),
        )
        .init();

    let cli = Cli::parse_normalized();
    let Some(log_path) = cli.log_path() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    if let Err(e) = run(cli, log_path).await {
        // Fatal errors are reported even when RUST_LOG silences this crate.
        if tracing::enabled!(Level::ERROR) {
            error!("{e:#}");
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, log_path: PathBuf) -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::resolve(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    config.validate()?;

    pipeline::run(&config, &log_path).await?;
    Ok(())
}
