//! Reference citations derived from retrieved contexts.

use labchat_types::summary::{Reference, RetrievedContext};

use super::normalize::first_sentence;

/// Derive the reference for one retrieved context.
///
/// The source is `metadata.source`, falling back to the top-level `source`;
/// empty strings count as absent. Contexts without a source yield `None` and
/// are left out of the reference list.
pub fn reference_from_context(context: &RetrievedContext) -> Option<Reference> {
    let source = context
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_deref())
        .filter(|s| !s.is_empty())
        .or_else(|| context.source.as_deref().filter(|s| !s.is_empty()))?;

    let snippet = context
        .page_content
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(first_sentence)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(Reference {
        source: source.to_string(),
        snippet,
    })
}

pub fn references_from_contexts(contexts: &[RetrievedContext]) -> Vec<Reference> {
    contexts.iter().filter_map(reference_from_context).collect()
}

/// Render one reference as a list item.
pub fn render_reference(reference: &Reference) -> String {
    let mut html = String::from("<li>");
    if reference.is_link() {
        html.push_str(&format!(
            r#"<a href="{0}" target="_blank">{0}</a>"#,
            reference.source
        ));
    } else {
        html.push_str(&reference.source);
    }
    if let Some(snippet) = &reference.snippet {
        html.push_str(&format!(r#"<div class="source-snippet">{snippet}</div>"#));
    }
    html.push_str("</li>");
    html
}

/// Render the numbered reference block appended below a summary.
pub fn render_reference_list(references: &[Reference]) -> String {
    let mut html =
        String::from(r#"<div class="bot-references"><hr/><strong>References:</strong><ol>"#);
    for reference in references {
        html.push_str(&render_reference(reference));
    }
    html.push_str("</ol></div>");
    html
}
