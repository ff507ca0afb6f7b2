//! HTML for rendered portfolio and partner items.
//!
//! Images are emitted with `data-src` instead of `src`; the lazy loader swaps
//! them in once the element nears the viewport.

use constants::portfolio::{
    DEFERRED_SRC_ATTRIBUTE, LAZY_KEY_ATTRIBUTE, PARTNER_IMAGE_CLASS, PARTNER_ITEM_CLASS,
    PORTFOLIO_IMAGE_CLASS, PORTFOLIO_ITEM_CLASS,
};

use crate::catalog::ProjectRecord;
use crate::lazy::LazyKey;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn deferred_image(record: &ProjectRecord, class: &str, key: LazyKey) -> String {
    format!(
        r#"<img {DEFERRED_SRC_ATTRIBUTE}="{src}" {LAZY_KEY_ATTRIBUTE}="{key}" alt="{alt}" class="{class}" loading="lazy">"#,
        src = escape_html(&record.image),
        alt = escape_html(&record.title),
    )
}

/// Markup for a portfolio pass. `keys` pairs up with `items` by position.
pub fn portfolio_items(items: &[&ProjectRecord], keys: &[LazyKey]) -> String {
    items
        .iter()
        .zip(keys)
        .map(|(record, key)| {
            format!(
                r#"<div class="{PORTFOLIO_ITEM_CLASS}" data-category="{category}">{img}</div>"#,
                category = escape_html(&record.category),
                img = deferred_image(record, PORTFOLIO_IMAGE_CLASS, *key),
            )
        })
        .collect()
}

pub fn partner_items(items: &[&ProjectRecord], keys: &[LazyKey]) -> String {
    items
        .iter()
        .zip(keys)
        .map(|(record, key)| {
            format!(
                r#"<div class="{PARTNER_ITEM_CLASS}">{img}</div>"#,
                img = deferred_image(record, PARTNER_IMAGE_CLASS, *key),
            )
        })
        .collect()
}
