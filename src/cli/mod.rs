//! Command-line interface for fasta-diff.
//!
//! The resolver walks the argument vector once, left to right, opening file
//! resources as flags are dispatched and producing an immutable
//! [`Config`](crate::core::config::Config). No process termination happens
//! here: every failure is returned as a
//! [`ResolveError`](resolver::ResolveError) and the binary decides how to
//! report it.
//!
//! ## Usage
//!
//! ```text
//! # Add unique sequences read from stdin to master.fa, write to stdout
//! fasta-diff -m master.fa
//!
//! # Replace matching sequences, matching on ID and content
//! fasta-diff -m master.fa -p replace -t id_sequence extra.fa
//!
//! # Remove matching sequences, writing the result to a file
//! fasta-diff -m master.fa -p remove -o trimmed.fa extra.fa
//! ```
//!
//! The sole positional argument is the additional-collection path and must be
//! the final token; `-` (or omitting it) selects standard input. `-o -` (or
//! omitting `-o`) selects standard output.

use crate::core::config::Defaults;

pub mod resolver;

pub use resolver::{resolve, ResolveError};

/// Program name used in usage and diagnostic framing
pub const PROG: &str = "fasta-diff";

/// One-line usage summary, newline-terminated
pub const USAGE: &str =
    "usage: fasta-diff [-h] [-o OUTPUT] [-m MASTER] [-p OPERATION] [-t MATCH] [-q] [FASTA]\n";

/// Render the help body, interpolating the compiled-in defaults.
#[must_use]
pub fn help_text(defaults: &Defaults) -> String {
    format!(
        "\
Read two FASTA MSA files, a master file and a file of additional sequences, and write the result of reconciling them

optional arguments:
  -h, --help               show this help message and exit
  -m MASTER                a master FASTA file assumed aligned and with unique sequence IDs
  -o OUTPUT                write the reconciled FASTA to a file named OUTPUT (default=stdout)
  -p OPERATION             how sequences from FASTA modify MASTER (default={op})
                           add: UNIQUE sequences from FASTA are added to MASTER
                           replace: sequences from FASTA REPLACE sequences with the same ID in MASTER; new sequences are added
                           remove: sequences from FASTA are REMOVED from MASTER if they match
  -t MATCH                 how sequences in MASTER and FASTA are matched (default={mode})
                           id: ONLY the sequence ID
                           id_sequence: BOTH the sequence ID and the sequence itself (not case sensitive)
  -q                       suppress non-fatal diagnostics
  FASTA                    read additional sequences from this file (default=stdin)
",
        op = defaults.operation,
        mode = defaults.match_mode,
    )
}
