//! Line counting configuration

/// Prefix marking a comment line by default
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Configuration for meaningful line counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCountConfig {
    /// Lines starting with this prefix (after trimming) are not counted
    pub comment_prefix: String,
}

impl LineCountConfig {
    /// Set the comment prefix
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Check whether a single line counts as meaningful
    ///
    /// A line is meaningful when it is non-empty after trimming whitespace
    /// and does not start with the comment prefix. An empty prefix disables
    /// comment detection.
    pub fn is_meaningful(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.comment_prefix.is_empty() || !trimmed.starts_with(self.comment_prefix.as_str())
    }
}

impl Default for LineCountConfig {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}
