use crate::*;

/// Outcome of checking one source, built line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub source: String,
    pub lines: usize,
    pub violations: Vec<Violation>,
}

impl CheckSummary {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.lines += 1;
        if let Some(v) = verdict.into_violation() {
            self.violations.push(v);
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
