//! Command-line interface definitions for snoofetch.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials can be provided via flags or environment variables; the rest
//! of the options default to a ready-to-run comparison.

use crate::fetchers::TimeWindow;
use crate::fetchers::oauth::Credentials;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for a comparison run.
///
/// Every option has a default, so a bare invocation compares the methods on
/// r/python over the past week. The official API method only runs when all
/// three credential values are configured.
///
/// # Examples
///
/// ```sh
/// # Compare methods on the defaults
/// snoofetch
///
/// # A different subreddit and window, saving elsewhere
/// snoofetch -s rust -w month -o rust_posts.json
///
/// # Enable the official API method
/// REDDIT_CLIENT_ID=... REDDIT_CLIENT_SECRET=... REDDIT_USER_AGENT=... snoofetch
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Subreddit to fetch posts from
    #[arg(short, long, default_value = "python")]
    pub subreddit: String,

    /// Time window for the top listing
    #[arg(short, long, value_enum, default_value = "week")]
    pub window: TimeWindow,

    /// Maximum number of posts per method
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// File the JSON endpoint's results are saved to
    #[arg(short, long, default_value = "reddit_posts.json")]
    pub output: PathBuf,

    /// Also run the HTML scraping method (discouraged; see the printed guidelines)
    #[arg(long)]
    pub include_scrape: bool,

    /// Reddit script-app client id (enables the official API method)
    #[arg(long, env = "REDDIT_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Reddit script-app client secret
    #[arg(long, env = "REDDIT_CLIENT_SECRET")]
    pub client_secret: Option<String>,

    /// User agent identifying this app to the official API
    #[arg(long, env = "REDDIT_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl Cli {
    /// Assemble credentials when all three values are configured.
    ///
    /// The official API method needs the full set; a partial set is treated
    /// the same as none.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.client_id, &self.client_secret, &self.user_agent) {
            (Some(client_id), Some(client_secret), Some(user_agent)) => Some(Credentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                user_agent: user_agent.clone(),
            }),
            _ => None,
        }
    }
}
