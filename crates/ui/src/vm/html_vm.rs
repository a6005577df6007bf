use std::collections::HashSet;

/// Sanitize provider text for rendering as inner HTML.
///
/// Provider strings arrive entity-encoded (`&quot;`, `&#039;`) and may carry
/// light inline markup. Only inline formatting tags survive.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["b", "i", "em", "strong", "u", "sub", "sup", "br", "span"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}

/// Provider text with all markup removed and entities decoded, for terminals.
#[must_use]
pub fn plain_text(html: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(html).to_string();
    // The serializer re-escapes these three; everything else is already decoded.
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
