//! Pushshift historical search method.
//!
//! [Pushshift](https://api.pushshift.io) archives Reddit submissions and
//! exposes them through a search API. It needs no credentials and reaches
//! further back than Reddit's own listings, but the service is community run
//! and has been deprecated more than once; availability varies.

use crate::fetchers::{Fetch, REQUEST_TIMEOUT, TimeWindow};
use crate::models::ArchivedPost;
use crate::utils::truncate_chars;
use chrono::Utc;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

const PUSHSHIFT_BASE: &str = "https://api.pushshift.io";

/// Search envelope returned by the submission endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ArchivedPost>,
}

/// Fetches top-scored archived submissions from the Pushshift search API.
#[derive(Debug)]
pub struct PushshiftFetcher {
    base_url: String,
    subreddit: String,
    window: TimeWindow,
    limit: usize,
}

impl PushshiftFetcher {
    pub fn new(subreddit: &str, window: TimeWindow, limit: usize) -> Self {
        Self {
            base_url: PUSHSHIFT_BASE.to_string(),
            subreddit: subreddit.to_string(),
            window,
            limit,
        }
    }

    async fn try_fetch(&self) -> Result<Vec<ArchivedPost>, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let url = format!("{}/reddit/search/submission/", self.base_url);
        let size = self.limit.to_string();

        let mut request = client.get(&url).query(&[
            ("subreddit", self.subreddit.as_str()),
            ("sort_type", "score"),
            ("sort", "desc"),
            ("size", size.as_str()),
        ]);
        if let Some(after) = self.window.after_epoch(Utc::now()) {
            let after = after.to_string();
            request = request.query(&[("after", after.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("pushshift returned status {}", status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_search(&body)
    }
}

impl Fetch for PushshiftFetcher {
    type Record = ArchivedPost;

    fn label(&self) -> &'static str {
        "PUSHSHIFT API METHOD"
    }

    #[instrument(level = "info", skip_all, fields(subreddit = %self.subreddit))]
    async fn fetch(&self) -> Option<Vec<ArchivedPost>> {
        match self.try_fetch().await {
            Ok(posts) => {
                info!(count = posts.len(), "Fetched posts from Pushshift");
                Some(posts)
            }
            Err(e) => {
                warn!(error = %e, "Pushshift fetch failed");
                None
            }
        }
    }
}

/// Parse a search body. Result size is left to the server's `size` parameter.
fn parse_search(body: &str) -> Result<Vec<ArchivedPost>, Box<dyn Error>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    for post in &response.data {
        if let Some(title) = post.title.as_deref() {
            debug!(title = %truncate_chars(title, 50), "Fetched post");
        }
    }
    Ok(response.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::stub::serve_once;

    const SEARCH_BODY: &str = r#"{
        "data": [
            {"title": "Archived gem", "score": 5400, "author": "carol", "created_utc": 1600000000.0, "subreddit": "python"},
            {"title": "Lost to time", "score": 12, "author": null, "created_utc": null}
        ]
    }"#;

    fn fetcher_at(base_url: String) -> PushshiftFetcher {
        PushshiftFetcher {
            base_url,
            subreddit: "python".to_string(),
            window: TimeWindow::Week,
            limit: 10,
        }
    }

    #[test]
    fn test_parse_search_maps_records() {
        let posts = parse_search(SEARCH_BODY).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.as_deref(), Some("Archived gem"));
        assert_eq!(posts[0].score, Some(5400));
        assert_eq!(posts[0].author.as_deref(), Some("carol"));
    }

    #[test]
    fn test_parse_search_keeps_null_fields_as_none() {
        let posts = parse_search(SEARCH_BODY).unwrap();
        assert_eq!(posts[1].author, None);
        assert_eq!(posts[1].created_utc, None);
    }

    #[test]
    fn test_parse_search_missing_data_key_is_empty() {
        let posts = parse_search(r#"{"metadata": {}}"#).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_parse_search_rejects_malformed_body() {
        assert!(parse_search("service unavailable").is_err());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_when_connection_refused() {
        let fetcher = fetcher_at("http://127.0.0.1:9".to_string());
        assert_eq!(fetcher.fetch().await, None);
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_error_status() {
        let base_url = serve_once("503 Service Unavailable", "text/plain", "down").await;
        let fetcher = fetcher_at(base_url);
        assert_eq!(fetcher.fetch().await, None);
    }

    #[tokio::test]
    async fn test_fetch_returns_posts_on_success() {
        let base_url = serve_once("200 OK", "application/json", SEARCH_BODY).await;
        let fetcher = fetcher_at(base_url);
        let posts = fetcher.fetch().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].score, Some(5400));
    }
}
