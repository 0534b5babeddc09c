use clap::{Parser, Subcommand};
use mediashare_sync::MediaType;

/// Headless media-sharing participant.
#[derive(Parser, Debug)]
#[command(name = "mediashare", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Relay URL override.
    #[arg(long)]
    pub relay: Option<String>,

    /// User id override.
    #[arg(long)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stay connected and show every command addressed to this user.
    Listen,
    /// Open media in a popout on the given users.
    Popout {
        url: String,
        /// Recipient user ids.
        #[arg(long = "to", required = true, value_delimiter = ',')]
        to: Vec<String>,
        #[arg(long = "loop")]
        loop_: bool,
    },
    /// Show media fullscreen on the given users.
    Fullscreen {
        url: String,
        #[arg(long = "to", required = true, value_delimiter = ',')]
        to: Vec<String>,
        /// `image` or `video`.
        #[arg(long = "type", default_value = "image")]
        media_type: MediaType,
        #[arg(long = "loop")]
        loop_: bool,
    },
    /// Clear fullscreen media on everyone.
    Dismiss,
    /// Print the effective config as JSON and exit.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
