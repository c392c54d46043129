// file: src/render.rs
// description: HTML rendering of the search results panel
// reference: results markup consumed by the site's stylesheet

use crate::models::{ResultKind, SearchResult};

/// Escape user-supplied text for HTML interpolation.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the ranked results as the clickable entries of the results panel.
/// Titles and breadcrumbs are escaped; the excerpt is built from plain text
/// by the engine, so its only markup is the `<mark>` highlight wrapper.
pub fn render_results(results: &[SearchResult], query: &str, path_prefix: &str) -> String {
    if results.is_empty() {
        return format!(
            r#"<div class="search-no-results">No results for "{}"</div>"#,
            escape_html(query)
        );
    }

    let mut html = String::new();
    for result in results {
        html.push_str(&render_result(result, path_prefix));
    }
    html
}

fn render_result(result: &SearchResult, path_prefix: &str) -> String {
    let mut entry = format!(
        r#"<a href="{}{}" class="search-result-item">"#,
        escape_html(path_prefix),
        escape_html(&result.url)
    );

    let title_cell = match (&result.kind, &result.section) {
        (ResultKind::Section, Some(section)) => {
            entry.push_str(&format!(
                r#"<div class="search-result-breadcrumb">{}</div>"#,
                escape_html(&result.breadcrumb())
            ));
            format!(
                r#"<span class="search-result-section">→ {}</span>"#,
                escape_html(section)
            )
        }
        _ => escape_html(&result.title),
    };

    entry.push_str(&format!(
        r#"<div class="search-result-header"><div class="search-result-title">{}</div></div>"#,
        title_cell
    ));

    if !result.excerpt.is_empty() {
        entry.push_str(&format!(
            r#"<div class="search-result-excerpt">{}</div>"#,
            result.excerpt
        ));
    }

    entry.push_str("</a>");
    entry
}
