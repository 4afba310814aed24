//! Streams a SQL script through the tokenizer and rules.
//!
//! Every physical line is judged on its own; the only state carried between
//! lines is the `CheckSummary` being built.
crate::reexport!(reporter);
crate::reexport!(summary);
use crate::*;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub struct Checker {
    policy: Policy,
}

impl Checker {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn check_line(&self, line_number: usize, line: &str) -> Verdict {
        let tokens = tokenize(line);
        trace!(line_number, %tokens, "Tokenized");
        self.policy.evaluate(&tokens, line_number, line)
    }

    /// Check every line of `reader`. `source` names it in errors and reports.
    ///
    /// A read error aborts the check; nothing is reported as finished.
    pub fn check_reader<R, P>(
        &self,
        source: &str,
        reader: R,
        reporter: &mut P,
    ) -> Result<CheckSummary>
    where
        R: BufRead,
        P: Reporter + ?Sized,
    {
        reporter.start(source)?;
        let mut summary = CheckSummary::new(source);

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(source, e))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let verdict = self.check_line(idx + 1, line);
            if let Some(violation) = verdict.violation() {
                reporter.violation(violation)?;
            }
            summary.record(verdict);
        }

        info!(
            source,
            lines = summary.lines,
            violations = summary.violation_count(),
            "Finished checking"
        );
        reporter.finish(&summary)?;
        Ok(summary)
    }

    pub fn check_file<P>(&self, path: &Path, reporter: &mut P) -> Result<CheckSummary>
    where
        P: Reporter + ?Sized,
    {
        debug!(path = %path.display(), "Opening");
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        self.check_reader(&path.display().to_string(), BufReader::new(file), reporter)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}
