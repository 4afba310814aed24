use crate::*;
use std::io::{self, Write};

/// Receives progress while a source is being checked.
pub trait Reporter {
    fn start(&mut self, source: &str) -> io::Result<()>;
    fn violation(&mut self, violation: &Violation) -> io::Result<()>;
    fn finish(&mut self, summary: &CheckSummary) -> io::Result<()>;
}

/// Plain text report: progress on `out`, violations on `err`.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn start(&mut self, source: &str) -> io::Result<()> {
        writeln!(self.out, "Starting to check sql statements in file {source}")
    }

    fn violation(&mut self, violation: &Violation) -> io::Result<()> {
        writeln!(self.err, "{violation}")
    }

    fn finish(&mut self, summary: &CheckSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Finished checking the file. Error line count: {}",
            summary.violation_count()
        )?;
        self.out.flush()?;
        self.err.flush()
    }
}

/// Keeps violations in memory and prints nothing.
impl Reporter for Vec<Violation> {
    fn start(&mut self, _source: &str) -> io::Result<()> {
        Ok(())
    }

    fn violation(&mut self, violation: &Violation) -> io::Result<()> {
        self.push(violation.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &CheckSummary) -> io::Result<()> {
        Ok(())
    }
}
