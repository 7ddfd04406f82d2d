//! Escaping for the different kinds of content that end up in markup.
//!
//! All functions are total and return the input unchanged (borrowed) when there is
//! nothing to escape. Replacements happen in a single pass, so output produced by one
//! replacement is never matched again.

use std::borrow::Cow;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

// Standard match kind, so that overlapping sequences (`<!-->`) are all found.
static COMMENT_SEQUENCES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(["<!--", "-->", "--!>"]).expect("comment patterns are valid")
});

static SCRIPT_SEQUENCES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .ascii_case_insensitive(true)
        .build(["<!--", "<script", "</script"])
        .expect("script patterns are valid")
});

static STYLE_SEQUENCES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["</style"])
        .expect("style patterns are valid")
});

/// Escape text content: `&`, `<` and `>` become entities. Quotes are left alone.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape the contents of a comment so that it cannot terminate early or nest.
///
/// `<!--`, `-->` and `--!>` are neutralised anywhere in the text, then a leading `>` or
/// `->` and a trailing `<!-` are escaped, as the HTML comment grammar forbids them.
pub fn escape_comment(text: &str) -> Cow<'_, str> {
    let mut escaped = escape_comment_sequences(text);

    let leading = if let Some(rest) = escaped.strip_prefix("->") {
        Some(format!("-&gt;{rest}"))
    } else {
        escaped.strip_prefix('>').map(|rest| format!("&gt;{rest}"))
    };
    if let Some(leading) = leading {
        escaped = Cow::Owned(leading);
    }

    let trailing = escaped
        .strip_suffix("<!-")
        .map(|head| format!("{head}&lt;!-"));
    if let Some(trailing) = trailing {
        escaped = Cow::Owned(trailing);
    }

    escaped
}

/// Escape the bracket opening `<!--` and the bracket closing `-->` or `--!>`.
fn escape_comment_sequences(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut brackets: Vec<usize> = COMMENT_SEQUENCES
        .find_overlapping_iter(text)
        .map(|m| {
            if bytes[m.start()] == b'<' {
                m.start()
            } else {
                m.end() - 1
            }
        })
        .collect();
    if brackets.is_empty() {
        return Cow::Borrowed(text);
    }
    brackets.sort_unstable();
    brackets.dedup();

    let mut escaped = String::with_capacity(text.len() + 3 * brackets.len());
    let mut last = 0;
    for index in brackets {
        escaped.push_str(&text[last..index]);
        escaped.push_str(if bytes[index] == b'<' { "&lt;" } else { "&gt;" });
        last = index + 1;
    }
    escaped.push_str(&text[last..]);
    Cow::Owned(escaped)
}

/// Escape the contents of a CDATA section. Only the terminator `]]>` is touched.
pub fn escape_cdata(text: &str) -> Cow<'_, str> {
    if text.contains("]]>") {
        Cow::Owned(text.replace("]]>", "]]&gt;"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Escape code placed inside a `<script>` element.
///
/// The `<` of `<!--`, `<script` and `</script` (in any letter case) is written as the
/// JavaScript escape `\x3C`, so the code cannot close the element it lives in.
pub fn escape_script_contents(code: &str) -> Cow<'_, str> {
    escape_leading_angle(&SCRIPT_SEQUENCES, code, "\\x3C", 1)
}

/// Escape a stylesheet placed inside a `<style>` element.
///
/// `</style` (in any letter case) becomes `<\/style`, which CSS reads the same way.
pub fn escape_style_contents(css: &str) -> Cow<'_, str> {
    escape_leading_angle(&STYLE_SEQUENCES, css, "<\\/", 2)
}

fn escape_leading_angle<'a>(
    patterns: &AhoCorasick,
    haystack: &'a str,
    replacement: &str,
    skip: usize,
) -> Cow<'a, str> {
    if !patterns.is_match(haystack) {
        return Cow::Borrowed(haystack);
    }
    let mut escaped = String::with_capacity(haystack.len() + 8);
    patterns.replace_all_with(haystack, &mut escaped, |_, matched, dst| {
        dst.push_str(replacement);
        dst.push_str(&matched[skip..]);
        true
    });
    Cow::Owned(escaped)
}
