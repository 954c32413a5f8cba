//! Deterministic cleanup of transcribed text.

use vx_protocol::CorrectionRule;

/// Lowercases, trims, then applies each correction rule once, in order.
///
/// Text written by one rule is never matched by a later rule in the same
/// pass, so rules cannot trigger each other.
#[derive(Debug, Clone)]
pub struct Corrector {
    rules: Vec<CorrectionRule>,
}

/// A run of text, and whether a rule produced it.
struct Span {
    text: String,
    replaced: bool,
}

impl Span {
    fn source(text: &str) -> Self {
        Self {
            text: text.to_string(),
            replaced: false,
        }
    }

    fn replacement(text: &str) -> Self {
        Self {
            text: text.to_string(),
            replaced: true,
        }
    }
}

impl Corrector {
    /// Patterns and replacements are lowercased; surrounding whitespace in a
    /// pattern is kept, since it limits where the pattern can match.
    pub fn new(rules: &[CorrectionRule]) -> Self {
        let rules = rules
            .iter()
            .map(|r| CorrectionRule {
                pattern: r.pattern.to_lowercase(),
                replacement: r.replacement.to_lowercase(),
            })
            .filter(|r| !r.pattern.is_empty())
            .collect();
        Self { rules }
    }

    /// Normalized rules, in application order.
    pub fn rules(&self) -> &[CorrectionRule] {
        &self.rules
    }

    pub fn correct(&self, text: &str) -> String {
        let mut spans = vec![Span::source(text.to_lowercase().trim())];
        for rule in &self.rules {
            spans = spans
                .into_iter()
                .flat_map(|span| apply_rule(rule, span))
                .collect();
        }
        let out: String = spans.into_iter().map(|span| span.text).collect();
        // Only matters for replacements with edge whitespace.
        out.trim().to_string()
    }
}

/// Replace every match of `rule` in an unreplaced span, splitting it around the matches.
fn apply_rule(rule: &CorrectionRule, span: Span) -> Vec<Span> {
    if span.replaced || !span.text.contains(rule.pattern.as_str()) {
        return vec![span];
    }

    let mut out = Vec::new();
    let mut last = 0;
    for (start, matched) in span.text.match_indices(rule.pattern.as_str()) {
        if start > last {
            out.push(Span::source(&span.text[last..start]));
        }
        out.push(Span::replacement(&rule.replacement));
        last = start + matched.len();
    }
    if last < span.text.len() {
        out.push(Span::source(&span.text[last..]));
    }
    out
}
