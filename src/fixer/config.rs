//! Configuration for the doc-comment inline tag fixer.

/// Tag names rewritten into `{@tag}` form by default.
pub const DEFAULT_INLINE_TAGS: &[&str] =
    &["example", "id", "internal", "inheritdoc", "link", "source", "toc", "tutorial"];

/// Inline tag fixer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTagConfig {
    /// Tag names (matched case-insensitively) whose inline form is normalized
    pub tags: Vec<String>,
    /// Whether a bare `@inheritdoc` is wrapped into `{@inheritdoc}`
    pub force_inline_inheritdoc: bool,
}

impl Default for InlineTagConfig {
    fn default() -> Self {
        Self {
            tags: DEFAULT_INLINE_TAGS.iter().map(|t| t.to_string()).collect(),
            force_inline_inheritdoc: true,
        }
    }
}

impl InlineTagConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether bare `@inheritdoc` is made inline
    pub fn with_force_inline_inheritdoc(mut self, force: bool) -> Self {
        self.force_inline_inheritdoc = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_tags() {
        let config = InlineTagConfig::default();
        assert_eq!(config.tags.len(), 8);
        assert!(config.tags.iter().any(|t| t == "inheritdoc"));
    }

    #[test]
    fn test_default_forces_inline_inheritdoc() {
        assert!(InlineTagConfig::default().force_inline_inheritdoc);
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_tags() {
        let config = InlineTagConfig::new().with_tags(["see"]);
        assert_eq!(config.tags, vec!["see".to_string()]);
        // Other fields unchanged
        assert!(config.force_inline_inheritdoc);
    }

    #[test]
    fn test_with_force_inline_inheritdoc() {
        let config = InlineTagConfig::new().with_force_inline_inheritdoc(false);
        assert!(!config.force_inline_inheritdoc);
    }
}
