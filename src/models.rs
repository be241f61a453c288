//! Record types produced by the four retrieval methods.
//!
//! Each retrieval method yields its own record shape, reflecting what that
//! source actually exposes:
//! - [`ApiPost`]: full fields from the authenticated official API
//! - [`ListedPost`]: fields from the public `.json` listing endpoint
//! - [`ArchivedPost`]: historical fields from the Pushshift search API
//! - [`ScrapedPost`]: title and link recovered from raw listing HTML
//!
//! The [`PostFields`] trait gives the console renderer uniform access to the
//! fields shared across shapes without collapsing them into one wide struct.
//! Optional fields serialize as `null` when the source omitted them.

use serde::{Deserialize, Serialize};

/// A post retrieved through the official authenticated API.
///
/// The OAuth listing endpoint always reports these fields, so none are
/// optional. Deleted accounts show up as the `[deleted]` sentinel string
/// rather than a missing author.
///
/// # Field Names
///
/// The API payload calls the comment count `num_comments`; this shape
/// stores and serializes it as `comments`, with a serde alias covering
/// deserialization from the raw payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiPost {
    /// The post title as submitted.
    pub title: String,
    /// The submitting account's name.
    pub author: String,
    /// Net vote score at fetch time. Can be negative.
    pub score: i64,
    /// Comment count at fetch time.
    #[serde(alias = "num_comments")]
    pub comments: u64,
    /// The submitted link, or the permalink for self posts.
    pub url: String,
    /// Submission time as a UTC epoch timestamp.
    pub created_utc: f64,
}

/// A post from the public `.json` listing endpoint.
///
/// The endpoint mirrors the official API's field names but makes no
/// guarantees about which are populated, so every field stays optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListedPost {
    /// The post title.
    pub title: Option<String>,
    /// Net vote score at fetch time.
    pub score: Option<i64>,
    /// The submitting account's name.
    pub author: Option<String>,
    /// Comment count at fetch time.
    pub num_comments: Option<u64>,
    /// The submitted link, or the permalink for self posts.
    pub url: Option<String>,
    /// Submission time as a UTC epoch timestamp.
    pub created_utc: Option<f64>,
}

/// A post returned by the Pushshift historical search API.
///
/// Archive records vary with the age of the crawl, so every field is
/// optional and serializes as `null` when the archive omitted it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArchivedPost {
    /// The post title.
    pub title: Option<String>,
    /// Score at the time the archive captured the post.
    pub score: Option<i64>,
    /// The submitting account's name.
    pub author: Option<String>,
    /// Submission time as a UTC epoch timestamp.
    pub created_utc: Option<f64>,
}

/// A post recovered by scraping the listing HTML.
///
/// Listing markup only reliably exposes the title anchor, so this is the
/// thinnest shape. `url` is `None` when the anchor carried no usable href.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScrapedPost {
    /// Anchor text of the post title.
    pub title: String,
    /// Absolute link target, when the anchor had one.
    pub url: Option<String>,
}

/// Uniform read access to the fields the console renderer cares about.
///
/// Shapes that lack a field keep the `None` default; the renderer prints
/// score and author lines only for records that carry them.
pub trait PostFields {
    /// The post title, when the source provided one.
    fn title(&self) -> Option<&str>;

    /// The post score, for shapes that carry one.
    fn score(&self) -> Option<i64> {
        None
    }

    /// The submitting author, for shapes that carry one.
    fn author(&self) -> Option<&str> {
        None
    }
}

impl PostFields for ApiPost {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn score(&self) -> Option<i64> {
        Some(self.score)
    }

    fn author(&self) -> Option<&str> {
        Some(&self.author)
    }
}

impl PostFields for ListedPost {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn score(&self) -> Option<i64> {
        self.score
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl PostFields for ArchivedPost {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn score(&self) -> Option<i64> {
        self.score
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl PostFields for ScrapedPost {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>()
    }

    #[test]
    fn test_api_post_serialized_field_set() {
        let post = ApiPost {
            title: "Release notes".to_string(),
            author: "alice".to_string(),
            score: 42,
            comments: 7,
            url: "https://example.com/a".to_string(),
            created_utc: 1_700_000_000.0,
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            object_keys(&value),
            vec!["author", "comments", "created_utc", "score", "title", "url"]
        );
    }

    #[test]
    fn test_api_post_accepts_payload_field_name() {
        let json = r#"{
            "title": "Release notes",
            "author": "alice",
            "score": 42,
            "num_comments": 7,
            "url": "https://example.com/a",
            "created_utc": 1700000000.0
        }"#;

        let post: ApiPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.comments, 7);
    }

    #[test]
    fn test_api_post_round_trip() {
        let post = ApiPost {
            title: "Release notes".to_string(),
            author: "alice".to_string(),
            score: -3,
            comments: 0,
            url: "https://example.com/a".to_string(),
            created_utc: 1_700_000_000.0,
        };

        let json = serde_json::to_string(&post).unwrap();
        let parsed: ApiPost = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_listed_post_missing_fields_become_none() {
        let post: ListedPost = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(post.title.as_deref(), Some("Only a title"));
        assert_eq!(post.score, None);
        assert_eq!(post.author, None);
        assert_eq!(post.num_comments, None);
        assert_eq!(post.url, None);
        assert_eq!(post.created_utc, None);
    }

    #[test]
    fn test_listed_post_serializes_missing_fields_as_null() {
        let post = ListedPost {
            title: Some("Only a title".to_string()),
            score: None,
            author: None,
            num_comments: None,
            url: None,
            created_utc: None,
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            object_keys(&value),
            vec!["author", "created_utc", "num_comments", "score", "title", "url"]
        );
        assert!(value.get("score").unwrap().is_null());
        assert!(value.get("author").unwrap().is_null());
    }

    #[test]
    fn test_archived_post_serialized_field_set() {
        let post = ArchivedPost {
            title: Some("From the archive".to_string()),
            score: Some(10),
            author: None,
            created_utc: Some(1_600_000_000.0),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            object_keys(&value),
            vec!["author", "created_utc", "score", "title"]
        );
    }

    #[test]
    fn test_scraped_post_round_trip() {
        let post = ScrapedPost {
            title: "A headline".to_string(),
            url: Some("https://old.reddit.com/r/rust/comments/abc/".to_string()),
        };

        let json = serde_json::to_string(&post).unwrap();
        let parsed: ScrapedPost = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_post_fields_scraped_has_no_score_or_author() {
        let post = ScrapedPost {
            title: "A headline".to_string(),
            url: None,
        };

        assert_eq!(post.title(), Some("A headline"));
        assert_eq!(post.score(), None);
        assert_eq!(post.author(), None);
    }

    #[test]
    fn test_post_fields_listed_passthrough() {
        let post = ListedPost {
            title: None,
            score: Some(99),
            author: Some("bob".to_string()),
            num_comments: Some(4),
            url: None,
            created_utc: None,
        };

        assert_eq!(post.title(), None);
        assert_eq!(post.score(), Some(99));
        assert_eq!(post.author(), Some("bob"));
    }

    #[test]
    fn test_post_fields_api_always_present() {
        let post = ApiPost {
            title: "Release notes".to_string(),
            author: "[deleted]".to_string(),
            score: 42,
            comments: 7,
            url: "https://example.com/a".to_string(),
            created_utc: 1_700_000_000.0,
        };

        assert_eq!(post.title(), Some("Release notes"));
        assert_eq!(post.score(), Some(42));
        assert_eq!(post.author(), Some("[deleted]"));
    }
}
