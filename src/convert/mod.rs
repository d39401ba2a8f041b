//! HTML to Markdown conversion.
//!
//! This module converts the editor's HTML output into Markdown:
//! - One DOM pass that folds checkbox-list state into the item text
//! - An ordered sequence of text substitutions over the serialized HTML
//! - Blank-line collapse, entity decode, trim
//!
//! This is deliberately not a general HTML converter. The input is the
//! bounded dialect the editor emits (the tag set in `rules`), and the
//! substitutions run in a fixed order that the output depends on. Markup
//! outside the dialect passes through as literal text.

mod dom;
mod rules;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of blank lines, including lines of pure whitespace.
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Convert editor-emitted HTML into Markdown.
///
/// Pure and infallible: unknown markup is passed through rather than
/// rejected, and malformed input degrades to whatever the substitutions
/// produce. Nested lists flatten to top level; this matches the flat
/// substitution model and is a known limitation, not a bug to fix here.
pub fn html_to_markdown(html: &str) -> String {
    let _span = tracing::debug_span!("html_to_markdown", bytes = html.len()).entered();
    let normalized = dom::normalize(html);
    let rewritten = rules::apply(&normalized);
    let collapsed = collapse_blank_runs(&rewritten);
    let decoded = decode_entities(&collapsed);
    decoded.trim().to_string()
}

/// Collapse every run of blank lines to a single blank line.
///
/// One global pass. The `\s*` between the newlines also swallows
/// whitespace-only lines left behind by stripped tags.
fn collapse_blank_runs(text: &str) -> Cow<'_, str> {
    BLANK_RUN.replace_all(text, "\n\n")
}

/// Decode the three entities the editor escapes in text content.
///
/// Order matters: `&amp;` is decoded last, in a single pass, so
/// `&amp;amp;` becomes `&amp;` rather than `&`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
