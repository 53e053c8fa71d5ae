//! Best-effort HTML to plain text conversion.

/// Converts an HTML fragment to plain text.
///
/// Strips markup tags, trims the result as a whole, drops carriage returns,
/// trims each remaining line, and rejoins with CRLF. HTML entities are left
/// untouched and block elements like `<br>` or `<p>` are removed rather than
/// translated to line breaks.
#[must_use]
pub fn html_to_plain(html: &str) -> String {
    let stripped = strip_tags(html);
    let content = stripped.trim().replace('\r', "");

    content
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Removes everything between `<` and the next `>`, inclusive. An unclosed
/// tag swallows the rest of the input.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(html_to_plain("hello"), "hello");
    }

    #[test]
    fn test_tags_stripped() {
        assert_eq!(html_to_plain("<p>hello <b>world</b></p>"), "hello world");
    }

    #[test]
    fn test_br_removed_not_translated() {
        assert_eq!(html_to_plain("one<br>two"), "onetwo");
    }

    #[test]
    fn test_lines_trimmed_and_joined_with_crlf() {
        let html = "  <div>\n   first line  \n\n  second line\t\n</div>  ";
        assert_eq!(html_to_plain(html), "first line\r\n\r\nsecond line");
    }

    #[test]
    fn test_carriage_returns_dropped() {
        assert_eq!(html_to_plain("a\r\nb\rc"), "a\r\nbc");
    }

    #[test]
    fn test_entities_left_untouched() {
        assert_eq!(html_to_plain("fish &amp; chips"), "fish &amp; chips");
    }

    #[test]
    fn test_unclosed_tag_swallows_rest() {
        assert_eq!(html_to_plain("before <a href="), "before");
    }

    #[test]
    fn test_stray_closing_bracket_kept() {
        assert_eq!(html_to_plain("a > b"), "a > b");
    }
}
