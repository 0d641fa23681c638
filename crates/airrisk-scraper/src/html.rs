//! Text helpers for the loosely formatted markup the feed publishes.

use std::sync::LazyLock;

use regex::Regex;

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid br regex"));
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Reduces an HTML fragment to plain text.
///
/// `<br>` variants become newlines, every other tag is dropped, and the
/// handful of entities the site emits are decoded. `&amp;` is decoded before
/// `&lt;`/`&gt;`, so double-escaped markup collapses fully.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let with_breaks = BR_TAG.replace_all(html, "\n");
    let untagged = ANY_TAG.replace_all(&with_breaks, "");
    untagged
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

/// Undoes the escaping used inside single-quoted script literals:
/// `\'` becomes `'` and a literal `\n` becomes a newline.
#[must_use]
pub fn unescape_literal(raw: &str) -> String {
    raw.replace("\\'", "'").replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_converts_breaks_to_newlines() {
        assert_eq!(strip_html("one<br>two<BR />three"), "one\ntwo\nthree");
    }

    #[test]
    fn strip_html_removes_tags_and_trims() {
        assert_eq!(
            strip_html("  <p>Avoid <strong>all</strong> altitudes</p> "),
            "Avoid all altitudes"
        );
    }

    #[test]
    fn strip_html_decodes_entities() {
        assert_eq!(
            strip_html("FL&nbsp;260 &amp; above &lt;NOTAM&gt; &quot;x&quot; it&#39;s"),
            "FL 260 & above <NOTAM> \"x\" it's"
        );
    }

    #[test]
    fn unescape_literal_handles_quotes_and_newlines() {
        assert_eq!(unescape_literal(r"It\'s\nclosed"), "It's\nclosed");
    }

    #[test]
    fn unescape_literal_leaves_plain_text() {
        assert_eq!(unescape_literal("plain text"), "plain text");
    }
}
