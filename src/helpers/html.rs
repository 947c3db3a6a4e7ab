//! HTML and text helper functions

use lazy_static::lazy_static;
use regex::Regex;

/// Average reading speed used for read-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Replace every markup tag with a space
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

/// Count whitespace-separated words once tags are removed
pub fn count_words(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

/// Estimated minutes to read, never less than one
pub fn read_time(html: &str) -> u32 {
    let minutes = count_words(html).div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hi</p>").split_whitespace().collect::<Vec<_>>(), ["Hi"]);
        // adjacent words separated only by a tag stay separate
        assert_eq!(count_words("one<br>two"), 2);
    }

    #[test]
    fn test_count_words_ignores_attributes() {
        let html = r#"<a href="https://example.com/a long/path" title="many words here">link</a>"#;
        assert_eq!(count_words(html), 1);
    }

    #[test]
    fn test_read_time_floor() {
        assert_eq!(read_time(""), 1);
        assert_eq!(read_time("<p></p>"), 1);
        assert_eq!(read_time("<p>Hi there</p>"), 1);
    }

    #[test]
    fn test_read_time_rounds_up() {
        let words = vec!["word"; 200].join(" ");
        assert_eq!(read_time(&words), 1);

        let words = vec!["word"; 201].join(" ");
        assert_eq!(read_time(&format!("<p>{}</p>", words)), 2);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & <b>"), "a &amp; &lt;b&gt;");
    }
}
