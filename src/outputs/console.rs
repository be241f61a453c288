//! Console transcript rendering.
//!
//! Rendering is split from printing so the exact transcript text is
//! testable: [`render_listing`] builds a method's section as a `String` and
//! [`print_listing`] writes it to stdout. Diagnostics never pass through
//! here; those belong to `tracing`.

use crate::models::PostFields;
use crate::utils::truncate_chars;
use std::fmt::Write;

/// Width of the `=` banners around section headings.
pub const BANNER_WIDTH: usize = 70;

/// Display cut applied to titles, in characters.
const TITLE_DISPLAY_CHARS: usize = 60;

/// Render one method's section of the transcript.
///
/// An empty slice renders the no-data notice instead of a section.
/// Otherwise the section is a banner carrying the method label, a count
/// line, and one numbered entry per post: the title cut to 60 characters
/// (falling back to `N/A`), then score and author lines for records that
/// carry them, then a blank line.
pub fn render_listing<R: PostFields>(label: &str, posts: &[R]) -> String {
    let mut out = String::new();

    if posts.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "⚠ No data from {label}").unwrap();
        writeln!(out).unwrap();
        return out;
    }

    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out).unwrap();
    writeln!(out, "{banner}").unwrap();
    writeln!(out, "{label}").unwrap();
    writeln!(out, "{banner}").unwrap();
    writeln!(out, "Total posts fetched: {}", posts.len()).unwrap();
    writeln!(out).unwrap();

    for (i, post) in posts.iter().enumerate() {
        let title = post.title().unwrap_or("N/A");
        writeln!(
            out,
            "{}. {}...",
            i + 1,
            truncate_chars(title, TITLE_DISPLAY_CHARS)
        )
        .unwrap();
        if let Some(score) = post.score() {
            writeln!(out, "   Score: {score}").unwrap();
        }
        if let Some(author) = post.author() {
            writeln!(out, "   Author: {author}").unwrap();
        }
        writeln!(out).unwrap();
    }

    out
}

/// Print one method's section to stdout.
pub fn print_listing<R: PostFields>(label: &str, posts: &[R]) {
    print!("{}", render_listing(label, posts));
}
