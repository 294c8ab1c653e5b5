use clap::{Parser, Subcommand};

/// Artifact Notifier – post a release APK to a Telegram chat from CI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Upload build/app/outputs/flutter-apk/app-release-$VERSION_NAME.apk (default)
    Send,
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn action(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Send)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
