//! Load test result models

use std::fmt;
use std::time::Duration;

const RULE_WIDTH: usize = 30;

/// Outcome of a single simulated user's request
#[derive(Debug, Clone)]
pub struct UserOutcome {
    pub user_id: usize,
    pub success: bool,
    pub elapsed: Duration,
}

/// Aggregated pass/fail counts for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTestSummary {
    pub successes: usize,
    pub total: usize,
}

impl LoadTestSummary {
    /// Count the `true` markers in a result list against the expected total
    pub fn from_results(results: &[bool], total: usize) -> Self {
        Self {
            successes: results.iter().filter(|&&ok| ok).count(),
            total,
        }
    }

    pub fn is_stable(&self) -> bool {
        self.successes == self.total
    }

    pub fn verdict(&self) -> &'static str {
        if self.is_stable() {
            "✅ SYSTEM IS STABLE under load."
        } else {
            "⚠️  Some requests failed. Check server logs."
        }
    }
}

impl fmt::Display for LoadTestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Test Complete.")?;
        writeln!(f, "Successful Requests: {}/{}", self.successes, self.total)?;
        writeln!(f, "{}", rule)?;
        write!(f, "{}", self.verdict())
    }
}
