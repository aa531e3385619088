//! Minimal Markdown-to-HTML rendering for bot summaries.
//!
//! Supports exactly four constructs: `**bold**` spans, ordered list items
//! (`1. item`), unordered list items (`* item`), and paragraphs. Lists do not
//! nest. Input is not HTML-escaped; bot text is trusted backend output.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").expect("ordered list pattern is valid"));

/// Render the supported Markdown subset to an HTML fragment.
///
/// Bold spans are replaced before line splitting, so they never cross a line
/// break. Each line is trimmed, then classified:
///
/// - `^[0-9]+\.\s+` (ASCII digits only) opens `<ol>` if needed and emits a `<li>` without the marker
/// - a `"* "` prefix opens `<ul>` if needed and emits a `<li>`
/// - anything else closes open lists and, unless blank, emits `<p>`
///
/// Lists still open at end of input are closed, `</ol>` before `</ul>`.
pub fn markdown_to_html(markdown: &str) -> String {
    let text = BOLD.replace_all(markdown, "<strong>${1}</strong>");

    let mut html = String::new();
    let mut in_ordered = false;
    let mut in_unordered = false;

    for raw_line in text.split('\n') {
        let line = raw_line.trim();

        if let Some(marker) = ORDERED_MARKER.find(line) {
            if !in_ordered {
                html.push_str("<ol>");
                in_ordered = true;
            }
            html.push_str("<li>");
            html.push_str(&line[marker.end()..]);
            html.push_str("</li>");
        } else if let Some(item) = line.strip_prefix("* ") {
            if !in_unordered {
                html.push_str("<ul>");
                in_unordered = true;
            }
            html.push_str("<li>");
            html.push_str(item);
            html.push_str("</li>");
        } else {
            close_lists(&mut html, &mut in_ordered, &mut in_unordered);
            if !line.is_empty() {
                html.push_str("<p>");
                html.push_str(line);
                html.push_str("</p>");
            }
        }
    }

    close_lists(&mut html, &mut in_ordered, &mut in_unordered);
    html
}

fn close_lists(html: &mut String, in_ordered: &mut bool, in_unordered: &mut bool) {
    if *in_ordered {
        html.push_str("</ol>");
        *in_ordered = false;
    }
    if *in_unordered {
        html.push_str("</ul>");
        *in_unordered = false;
    }
}
