//! Raw HTML scraping method.
//!
//! Fetches the old-reddit rendition of a listing page and pulls post titles
//! out of the markup. old.reddit.com still server-renders listings, which
//! keeps this barely workable, but the selector is tied to markup Reddit can
//! change at any time and the ToS discourages automated HTML access. The
//! runner only exercises this method behind an explicit opt-in flag.

use crate::fetchers::{Fetch, REQUEST_TIMEOUT, TimeWindow};
use crate::models::ScrapedPost;
use crate::utils::truncate_chars;
use once_cell::sync::Lazy;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

const OLD_REDDIT_BASE: &str = "https://old.reddit.com";

/// Full browser agent; the listing page serves a bot interstitial otherwise.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Post title anchors on old-reddit listing pages. Brittle.
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-event-action="title"]"#).unwrap());

/// Fetches top posts by scraping the listing HTML.
#[derive(Debug)]
pub struct HtmlScrapeFetcher {
    base_url: String,
    subreddit: String,
    window: TimeWindow,
    limit: usize,
}

impl HtmlScrapeFetcher {
    pub fn new(subreddit: &str, window: TimeWindow, limit: usize) -> Self {
        Self {
            base_url: OLD_REDDIT_BASE.to_string(),
            subreddit: subreddit.to_string(),
            window,
            limit,
        }
    }

    async fn try_fetch(&self) -> Result<Vec<ScrapedPost>, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let url = format!("{}/r/{}/top/", self.base_url, self.subreddit);

        let response = client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .query(&[("t", self.window.as_query())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("listing page returned status {}", status.as_u16()).into());
        }

        let body = response.text().await?;
        let base = Url::parse(&url)?;
        Ok(extract_posts(&body, &base, self.limit))
    }
}

impl Fetch for HtmlScrapeFetcher {
    type Record = ScrapedPost;

    fn label(&self) -> &'static str {
        "HTML SCRAPING METHOD"
    }

    #[instrument(level = "info", skip_all, fields(subreddit = %self.subreddit))]
    async fn fetch(&self) -> Option<Vec<ScrapedPost>> {
        match self.try_fetch().await {
            Ok(posts) => {
                info!(count = posts.len(), "Scraped posts from listing HTML");
                Some(posts)
            }
            Err(e) => {
                warn!(error = %e, "HTML scrape failed");
                None
            }
        }
    }
}

/// Extract posts from listing markup.
///
/// Considers the first `limit` title anchors and skips any whose text is
/// empty, so a page of malformed anchors can yield fewer records than
/// `limit`. Relative hrefs are resolved against `base`; an anchor without
/// an href still yields a record with no url.
fn extract_posts(html: &str, base: &Url, limit: usize) -> Vec<ScrapedPost> {
    let document = Html::parse_document(html);
    let mut posts = Vec::new();

    for element in document.select(&TITLE_SELECTOR).take(limit) {
        let title = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
        if title.is_empty() {
            warn!("Skipping title anchor with no text");
            continue;
        }
        let url = element
            .value()
            .attr("href")
            .and_then(|href| base.join(href).ok())
            .map(|resolved| resolved.to_string());
        debug!(title = %truncate_chars(&title, 50), "Scraped post");
        posts.push(ScrapedPost { title, url });
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::stub::serve_once;

    const LISTING_HTML: &str = r#"<html><body>
        <div class="thing">
            <a class="title" data-event-action="title" href="/r/rust/comments/abc/first_post/">First post</a>
            <a class="flat-list" href="/r/rust/comments/abc/">12 comments</a>
        </div>
        <div class="thing">
            <a class="title" data-event-action="title" href="https://example.com/article">Second post</a>
        </div>
        <div class="thing">
            <a class="title" data-event-action="title" href="/r/rust/comments/def/">   </a>
        </div>
        <div class="thing">
            <a class="title" data-event-action="title">Third post</a>
        </div>
    </body></html>"#;

    fn page_base() -> Url {
        Url::parse("https://old.reddit.com/r/rust/top/").unwrap()
    }

    fn fetcher_at(base_url: String) -> HtmlScrapeFetcher {
        HtmlScrapeFetcher {
            base_url,
            subreddit: "rust".to_string(),
            window: TimeWindow::Week,
            limit: 10,
        }
    }

    #[test]
    fn test_extract_posts_skips_empty_titles() {
        let posts = extract_posts(LISTING_HTML, &page_base(), 10);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "First post");
        assert_eq!(posts[1].title, "Second post");
        assert_eq!(posts[2].title, "Third post");
    }

    #[test]
    fn test_extract_posts_resolves_relative_hrefs() {
        let posts = extract_posts(LISTING_HTML, &page_base(), 10);
        assert_eq!(
            posts[0].url.as_deref(),
            Some("https://old.reddit.com/r/rust/comments/abc/first_post/")
        );
        assert_eq!(posts[1].url.as_deref(), Some("https://example.com/article"));
    }

    #[test]
    fn test_extract_posts_anchor_without_href_has_no_url() {
        let posts = extract_posts(LISTING_HTML, &page_base(), 10);
        assert_eq!(posts[2].url, None);
    }

    #[test]
    fn test_extract_posts_limit_counts_anchors_not_records() {
        // The empty third anchor consumes a slot, so limit 3 yields 2 records.
        let posts = extract_posts(LISTING_HTML, &page_base(), 3);
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_extract_posts_ignores_non_title_anchors() {
        let posts = extract_posts(LISTING_HTML, &page_base(), 10);
        assert!(posts.iter().all(|p| p.title != "12 comments"));
    }

    #[test]
    fn test_extract_posts_empty_page() {
        let posts = extract_posts("<html><body></body></html>", &page_base(), 10);
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_when_connection_refused() {
        let fetcher = fetcher_at("http://127.0.0.1:9".to_string());
        assert_eq!(fetcher.fetch().await, None);
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_error_status() {
        let base_url = serve_once("429 Too Many Requests", "text/html", "slow down").await;
        let fetcher = fetcher_at(base_url);
        assert_eq!(fetcher.fetch().await, None);
    }

    #[tokio::test]
    async fn test_fetch_returns_posts_on_success() {
        let base_url = serve_once("200 OK", "text/html", LISTING_HTML).await;
        let fetcher = fetcher_at(base_url);
        let posts = fetcher.fetch().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "First post");
    }
}
