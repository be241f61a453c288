//! # Snoofetch
//!
//! A side-by-side comparison of four ways to retrieve public post listings
//! from a subreddit, with the ethical tradeoffs of each spelled out in the
//! transcript it prints.
//!
//! ## Methods
//!
//! 1. **Official API**: OAuth2 script-app flow; runs only when credentials
//!    are configured
//! 2. **JSON endpoint**: the public `.json` listing (recommended); its
//!    results are also saved to disk
//! 3. **Pushshift**: third-party historical archive
//! 4. **HTML scraping**: markup parsing, opt-in via `--include-scrape`
//!
//! ## Usage
//!
//! ```sh
//! snoofetch --subreddit rust --window month --limit 10
//! ```
//!
//! ## Architecture
//!
//! Strictly sequential: each method is awaited to completion before the
//! next starts, each builds its own HTTP client, and a failed method
//! reports through `tracing` and yields nothing rather than stopping the
//! run. The process exits 0 regardless of how many methods produced data.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod fetchers;
mod guidelines;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use fetchers::Fetch;
use fetchers::listing::JsonListingFetcher;
use fetchers::oauth::OauthApiFetcher;
use fetchers::pushshift::PushshiftFetcher;
use fetchers::scrape::HtmlScrapeFetcher;
use guidelines::{BEST_PRACTICES, ETHICAL_GUIDELINES};
use outputs::console::{BANNER_WIDTH, print_listing};
use outputs::json::save_posts;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("snoofetch starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.subreddit, ?args.window, ?args.limit, "Parsed CLI arguments");

    let banner = "=".repeat(BANNER_WIDTH);

    println!("{ETHICAL_GUIDELINES}");
    println!("\n{banner}");
    println!("TESTING DIFFERENT SCRAPING METHODS");
    println!("{banner}\n");

    // ---- Method 1: official API (requires credentials) ----
    println!("1. Testing Official API (OAuth)...");
    match args.credentials() {
        Some(credentials) => {
            println!();
            let fetcher =
                OauthApiFetcher::new(credentials, &args.subreddit, args.window, args.limit);
            let api_posts = fetcher.fetch().await.unwrap_or_default();
            if !api_posts.is_empty() {
                print_listing(fetcher.label(), &api_posts);
            }
        }
        None => println!("   ⓘ Requires API credentials. Skipping unless configured.\n"),
    }

    // ---- Method 2: JSON endpoint (most reliable without credentials) ----
    println!("2. Testing JSON Endpoint (Recommended)...\n");
    let fetcher = JsonListingFetcher::new(&args.subreddit, args.window, args.limit);
    let listed_posts = fetcher.fetch().await.unwrap_or_default();
    if !listed_posts.is_empty() {
        print_listing(fetcher.label(), &listed_posts);
        save_posts(&listed_posts, &args.output).await;
    }

    // ---- Method 3: Pushshift (historical data) ----
    println!("\n3. Testing Pushshift API (Historical Data)...\n");
    let fetcher = PushshiftFetcher::new(&args.subreddit, args.window, args.limit);
    let archived_posts = fetcher.fetch().await.unwrap_or_default();
    if !archived_posts.is_empty() {
        print_listing(fetcher.label(), &archived_posts);
    }

    // ---- Method 4: HTML scraping (opt-in) ----
    if args.include_scrape {
        println!("\n4. Testing HTML Scraping (Not Recommended)...\n");
        let fetcher = HtmlScrapeFetcher::new(&args.subreddit, args.window, args.limit);
        let scraped_posts = fetcher.fetch().await.unwrap_or_default();
        if !scraped_posts.is_empty() {
            print_listing(fetcher.label(), &scraped_posts);
        }
    }

    println!("\n{banner}");
    println!("SUMMARY");
    println!("{banner}");
    println!("{BEST_PRACTICES}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
