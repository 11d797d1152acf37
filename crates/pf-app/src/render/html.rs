use pf_core::SearchTerm;
use regex::{Regex, RegexBuilder};

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps case-insensitive occurrences of the search term in `<mark>`.
///
/// Matching runs on the raw text and each segment is escaped on its own,
/// so a term can never land inside an HTML entity.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(term: &SearchTerm) -> Self {
        if term.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(term.as_str()))
            .case_insensitive(true)
            .build();
        if let Err(err) = &pattern {
            tracing::debug!(error = %err, "search term not highlightable");
        }
        Self {
            pattern: pattern.ok(),
        }
    }

    /// Escaped `text`, with matches marked.
    pub fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in pattern.find_iter(text) {
            out.push_str(&escape_html(&text[last..m.start()]));
            out.push_str("<mark>");
            out.push_str(&escape_html(m.as_str()));
            out.push_str("</mark>");
            last = m.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn highlights_every_match_case_insensitively() {
        let highlighter = Highlighter::new(&SearchTerm::new("cad"));
        assert_eq!(
            highlighter.apply("CAD model, cad drawing"),
            "<mark>CAD</mark> model, <mark>cad</mark> drawing"
        );
    }

    #[test]
    fn empty_term_only_escapes() {
        let highlighter = Highlighter::new(&SearchTerm::new("   "));
        assert_eq!(highlighter.apply("a < b"), "a &lt; b");
    }

    #[test]
    fn term_never_matches_inside_entities() {
        let highlighter = Highlighter::new(&SearchTerm::new("amp"));
        assert_eq!(
            highlighter.apply("R&D clamp"),
            "R&amp;D cl<mark>amp</mark>"
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let highlighter = Highlighter::new(&SearchTerm::new("c++"));
        assert_eq!(highlighter.apply("C++ tooling"), "<mark>C++</mark> tooling");
    }
}
