//! Scanner limits.

/// Default byte budget for the tag segment (`@` through its trailing spaces).
pub const MAX_TAG_SEGMENT: usize = 512;

/// Default byte budget for everything after the tag segment, CRLF included.
pub const MAX_BODY_SEGMENT: usize = 512;

/// Size budgets applied while scanning.
///
/// The two budgets are independent: a message may carry a full tag segment
/// and a full body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Maximum bytes in the tag segment.
    pub tag_budget: usize,
    /// Maximum bytes in the body segment.
    pub body_budget: usize,
}

impl ScannerConfig {
    /// Configuration with the RFC 1459 / IRCv3 defaults.
    pub const fn new() -> Self {
        Self {
            tag_budget: MAX_TAG_SEGMENT,
            body_budget: MAX_BODY_SEGMENT,
        }
    }

    /// Override the tag segment budget.
    pub const fn with_tag_budget(mut self, budget: usize) -> Self {
        self.tag_budget = budget;
        self
    }

    /// Override the body segment budget.
    pub const fn with_body_budget(mut self, budget: usize) -> Self {
        self.body_budget = budget;
        self
    }

    /// Longest possible line, tags and body combined. Saturates at
    /// `usize::MAX`.
    pub const fn line_budget(&self) -> usize {
        self.tag_budget.saturating_add(self.body_budget)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line_budget() {
        assert_eq!(ScannerConfig::default().line_budget(), 1024);
    }

    #[test]
    fn test_line_budget_saturates() {
        let config = ScannerConfig::new()
            .with_tag_budget(usize::MAX)
            .with_body_budget(usize::MAX);
        assert_eq!(config.line_budget(), usize::MAX);
    }
}
