//! Text cleanup applied to backend summaries and passages.

/// Normalize a summary string from the backend.
///
/// The backend JSON-encodes its answer before placing it in the response, so
/// the summary can arrive with literal `\n` escapes and an enclosing pair of
/// quotes. Escapes become real newlines and one layer of quotes is stripped.
pub fn normalize_summary(raw: &str) -> String {
    let unescaped = raw.replace("\\n", "\n");

    if unescaped.starts_with('"') && unescaped.ends_with('"') {
        if unescaped.len() < 2 {
            return String::new();
        }
        return unescaped[1..unescaped.len() - 1].to_string();
    }

    unescaped
}

/// First sentence of a passage.
///
/// A sentence ends at the first `.`, `?` or `!` that is followed by
/// whitespace; the terminator is kept. Text without such a boundary is
/// returned whole.
pub fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if matches!(ch, '.' | '?' | '!') {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..idx + ch.len_utf8()];
                }
            }
        }
    }

    text
}
