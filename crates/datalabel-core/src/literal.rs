//! Case-insensitive substring matching

/// True when `rule` occurs in `text`, ignoring case
pub fn literal_match(text: &str, rule: &str) -> bool {
    text.to_lowercase().contains(&rule.to_lowercase())
}

/// Literal matcher with the rule lowered once for a full pass over a column
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    needle: String,
}

impl LiteralMatcher {
    pub fn new(rule: &str) -> Self {
        Self {
            needle: rule.to_lowercase(),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}
