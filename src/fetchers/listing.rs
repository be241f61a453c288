//! Public `.json` listing endpoint method.
//!
//! Reddit serves a JSON rendition of any listing URL ending in `.json`. This
//! is the simplest sanctioned way to read public data without credentials,
//! though it only covers recent posts and is rate limited per IP.

use crate::fetchers::{Fetch, Listing, REQUEST_TIMEOUT, TimeWindow};
use crate::models::ListedPost;
use crate::utils::truncate_chars;
use reqwest::header::USER_AGENT;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

const REDDIT_BASE: &str = "https://www.reddit.com";

/// Plain browser-ish agent; Reddit throttles default library agents hard.
const LISTING_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Fetches one page of top posts from the public `.json` endpoint.
#[derive(Debug)]
pub struct JsonListingFetcher {
    base_url: String,
    subreddit: String,
    window: TimeWindow,
    limit: usize,
}

impl JsonListingFetcher {
    pub fn new(subreddit: &str, window: TimeWindow, limit: usize) -> Self {
        Self {
            base_url: REDDIT_BASE.to_string(),
            subreddit: subreddit.to_string(),
            window,
            limit,
        }
    }

    async fn try_fetch(&self) -> Result<Vec<ListedPost>, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let url = format!("{}/r/{}/top/.json", self.base_url, self.subreddit);
        let limit = self.limit.to_string();

        let response = client
            .get(&url)
            .header(USER_AGENT, LISTING_USER_AGENT)
            .query(&[("t", self.window.as_query()), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("listing endpoint returned status {}", status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_listing(&body, self.limit)
    }
}

impl Fetch for JsonListingFetcher {
    type Record = ListedPost;

    fn label(&self) -> &'static str {
        "JSON ENDPOINT METHOD"
    }

    #[instrument(level = "info", skip_all, fields(subreddit = %self.subreddit))]
    async fn fetch(&self) -> Option<Vec<ListedPost>> {
        match self.try_fetch().await {
            Ok(posts) => {
                info!(count = posts.len(), "Fetched posts from the JSON endpoint");
                Some(posts)
            }
            Err(e) => {
                warn!(error = %e, "JSON endpoint fetch failed");
                None
            }
        }
    }
}

/// Parse a listing body, keeping at most `limit` posts.
fn parse_listing(body: &str, limit: usize) -> Result<Vec<ListedPost>, Box<dyn Error>> {
    let listing: Listing<ListedPost> = serde_json::from_str(body)?;
    let mut posts = Vec::new();
    for child in listing.data.children.into_iter().take(limit) {
        if let Some(title) = child.data.title.as_deref() {
            debug!(title = %truncate_chars(title, 50), "Fetched post");
        }
        posts.push(child.data);
    }
    Ok(posts)
}
