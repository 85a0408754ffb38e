//! Ordered rewrite rules

/// Replace `pattern` with `replacement`
///
/// Rules are applied in slice order and each rule sees the output of the
/// rules before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl RewriteRule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self { pattern, replacement }
    }
}

/// Whether any rule's pattern occurs in `input`
pub fn any_pattern_in(rules: &[RewriteRule], input: &str) -> bool {
    rules.iter().any(|rule| input.contains(rule.pattern))
}
