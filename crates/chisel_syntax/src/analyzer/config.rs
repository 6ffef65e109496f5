//! Analyzer configuration.

/// How the multiline-array check treats a single line break left by a trailing comma, as in
/// `[1, 2,\n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingNewlinePolicy {
    /// The break before the closer does not make the array multiline.
    #[default]
    Ignore,
    /// Every line break counts.
    Count,
}

/// Tunables for [`super::TokensAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzerConfig {
    pub trailing_comma_newline: TrailingNewlinePolicy,
}

impl AnalyzerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing-newline policy for multiline-array checks
    pub fn with_trailing_comma_newline(mut self, policy: TrailingNewlinePolicy) -> Self {
        self.trailing_comma_newline = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_trailing_newline() {
        assert_eq!(AnalyzerConfig::default().trailing_comma_newline, TrailingNewlinePolicy::Ignore);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(AnalyzerConfig::new(), AnalyzerConfig::default());
    }

    #[test]
    fn test_with_trailing_comma_newline() {
        let config = AnalyzerConfig::new().with_trailing_comma_newline(TrailingNewlinePolicy::Count);
        assert_eq!(config.trailing_comma_newline, TrailingNewlinePolicy::Count);
    }
}
