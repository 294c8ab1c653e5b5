use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use artifact_notifier::cli::{Cli, Commands};
use artifact_notifier::config::Config;
use artifact_notifier::error::NotifyError;
use artifact_notifier::notifier::Notifier;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match cli.action() {
        Commands::Send => {
            let config = Config::from_env().context("Loading configuration from environment")?;
            let notifier = Notifier::telegram(&config);

            let rt = Runtime::new()?;
            match rt.block_on(notifier.send(&config)) {
                Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
                Err(NotifyError::ArtifactNotFound { path }) => {
                    println!("❌ APK file not found: {}", path.display());
                    std::process::exit(1);
                }
                Err(e) => return Err(e).context("Uploading artifact to Telegram"),
            }
        }
        Commands::Version { json } => {
            if *json {
                let info = serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                    "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "artifact-notifier {} (commit: {}, built: {})",
                    env!("CARGO_PKG_VERSION"),
                    option_env!("GIT_SHA").unwrap_or("unknown"),
                    option_env!("BUILD_DATE").unwrap_or("unknown"),
                );
            }
        }
    }
    Ok(())
}
