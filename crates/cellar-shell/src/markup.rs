//! Static markup the bootstrap script inserts as-is.

use crate::routes::{NOT_FOUND_MESSAGE, NOT_FOUND_TITLE};

pub const LOADING_MESSAGE: &str = "Loading application...";

/// Shown for any path without a view.
pub fn not_found_html() -> String {
    format!(
        "<div class=\"cellar-center\"><div><h2>{}</h2><p>{}</p></div></div>",
        escape_html(NOT_FOUND_TITLE),
        escape_html(NOT_FOUND_MESSAGE)
    )
}

/// Shown while a screen script loads.
pub fn loading_html() -> String {
    format!("<p class=\"cellar-center\">{}</p>", escape_html(LOADING_MESSAGE))
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
