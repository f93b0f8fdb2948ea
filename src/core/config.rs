use crate::core::stream::{InputStream, OutputStream};
use crate::core::types::{MatchMode, Operation};

/// Compiled-in defaults for the enumerated settings.
///
/// Passed into the resolver as its initial state; callers can substitute
/// their own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub operation: Operation,
    pub match_mode: MatchMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            operation: Operation::Add,
            match_mode: MatchMode::Id,
        }
    }
}

/// Validated execution configuration for one reconciliation run.
///
/// Constructed once per invocation by [`resolve`](crate::cli::resolver::resolve)
/// and never mutated afterwards. The configuration exclusively owns its three
/// streams for its entire lifetime; dropping it closes any file it opened,
/// while the process-standard streams are left open.
#[derive(Debug)]
pub struct Config {
    master: InputStream,
    additional: InputStream,
    output: OutputStream,
    operation: Operation,
    match_mode: MatchMode,
    quiet: bool,
}

impl Config {
    pub(crate) fn new(
        master: InputStream,
        additional: InputStream,
        output: OutputStream,
        operation: Operation,
        match_mode: MatchMode,
        quiet: bool,
    ) -> Self {
        Self {
            master,
            additional,
            output,
            operation,
            match_mode,
            quiet,
        }
    }

    /// The master collection, opened for reading
    #[must_use]
    pub fn master(&self) -> &InputStream {
        &self.master
    }

    pub fn master_mut(&mut self) -> &mut InputStream {
        &mut self.master
    }

    /// The additional collection, opened for reading (standard input by default)
    #[must_use]
    pub fn additional(&self) -> &InputStream {
        &self.additional
    }

    pub fn additional_mut(&mut self) -> &mut InputStream {
        &mut self.additional
    }

    /// The reconciled output destination (standard output by default)
    #[must_use]
    pub fn output(&self) -> &OutputStream {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputStream {
        &mut self.output
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    #[must_use]
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Decompose the configuration for the reconciliation engine.
    ///
    /// Returns `(master, additional, output, operation, match_mode, quiet)`,
    /// transferring ownership of all three streams to the caller.
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        InputStream,
        InputStream,
        OutputStream,
        Operation,
        MatchMode,
        bool,
    ) {
        (
            self.master,
            self.additional,
            self.output,
            self.operation,
            self.match_mode,
            self.quiet,
        )
    }
}
