//! The one piece of markup assistant replies may carry: `**bold**`.
//!
//! Text is split into [`Span`]s which the view renders as text nodes, so
//! nothing in a reply is ever interpreted as HTML.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
}

/// Splits `text` into plain and emphasized runs. Unmatched `**` stays
/// literal; empty plain runs are dropped.
pub fn parse(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(Span::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(Span::Strong(inner.as_str().to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(Span::Plain(text[cursor..].to_string()));
    }
    spans
}
