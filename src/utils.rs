//! String helpers shared by the fetchers and the console renderer.

/// Truncate a string to at most `max` characters.
///
/// Counts characters rather than bytes, so multibyte titles are cut without
/// splitting a UTF-8 sequence. The renderer uses this for the 60-character
/// display cut; the fetchers use it for 50-character log previews.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("short", 60), "short");
/// assert_eq!(truncate_chars("abcdef", 3), "abc");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
