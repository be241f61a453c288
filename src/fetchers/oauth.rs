//! Official API method using the OAuth2 script-app flow.
//!
//! Exchanges registered application credentials for a bearer token at
//! `/api/v1/access_token`, then reads the listing from `oauth.reddit.com`.
//! This is the sanctioned route: register a script app at
//! <https://www.reddit.com/prefs/apps> to obtain a client id and secret.
//! Unlike the anonymous methods, no request timeout is applied here.

use crate::fetchers::{Fetch, Listing, TimeWindow};
use crate::models::ApiPost;
use crate::utils::truncate_chars;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

const TOKEN_BASE: &str = "https://www.reddit.com";
const API_BASE: &str = "https://oauth.reddit.com";

/// Registered script-app credentials.
///
/// All three values come from the app registration page. The user agent is
/// part of the credential set: Reddit expects apps to identify themselves
/// with a descriptive agent string on every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Fetches top posts through the official authenticated API.
#[derive(Debug)]
pub struct OauthApiFetcher {
    token_base: String,
    api_base: String,
    credentials: Credentials,
    subreddit: String,
    window: TimeWindow,
    limit: usize,
}

impl OauthApiFetcher {
    pub fn new(credentials: Credentials, subreddit: &str, window: TimeWindow, limit: usize) -> Self {
        Self {
            token_base: TOKEN_BASE.to_string(),
            api_base: API_BASE.to_string(),
            credentials,
            subreddit: subreddit.to_string(),
            window,
            limit,
        }
    }

    /// Exchange the app credentials for a bearer token.
    async fn request_token(&self, client: &reqwest::Client) -> Result<String, Box<dyn Error>> {
        let response = client
            .post(format!("{}/api/v1/access_token", self.token_base))
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .header(USER_AGENT, &self.credentials.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("token endpoint returned status {}", status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_token(&body)
    }

    async fn try_fetch(&self) -> Result<Vec<ApiPost>, Box<dyn Error>> {
        let client = reqwest::Client::new();
        let token = self.request_token(&client).await?;
        debug!("Obtained access token");

        let limit = self.limit.to_string();
        let response = client
            .get(format!("{}/r/{}/top", self.api_base, self.subreddit))
            .bearer_auth(&token)
            .header(USER_AGENT, &self.credentials.user_agent)
            .query(&[("t", self.window.as_query()), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("listing endpoint returned status {}", status.as_u16()).into());
        }

        let body = response.text().await?;
        parse_top(&body, self.limit)
    }
}

impl Fetch for OauthApiFetcher {
    type Record = ApiPost;

    fn label(&self) -> &'static str {
        "OFFICIAL API METHOD"
    }

    #[instrument(level = "info", skip_all, fields(subreddit = %self.subreddit))]
    async fn fetch(&self) -> Option<Vec<ApiPost>> {
        match self.try_fetch().await {
            Ok(posts) => {
                info!(count = posts.len(), "Fetched posts from the official API");
                Some(posts)
            }
            Err(e) => {
                warn!(error = %e, "Official API fetch failed");
                None
            }
        }
    }
}

/// Parse the token exchange response.
fn parse_token(body: &str) -> Result<String, Box<dyn Error>> {
    let token: TokenResponse = serde_json::from_str(body)?;
    Ok(token.access_token)
}

/// Parse a listing body from the authenticated endpoint, keeping at most
/// `limit` posts.
fn parse_top(body: &str, limit: usize) -> Result<Vec<ApiPost>, Box<dyn Error>> {
    let listing: Listing<ApiPost> = serde_json::from_str(body)?;
    let mut posts = Vec::new();
    for child in listing.data.children.into_iter().take(limit) {
        debug!(title = %truncate_chars(&child.data.title, 50), "Fetched post");
        posts.push(child.data);
    }
    Ok(posts)
}
