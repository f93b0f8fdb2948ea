//! # fasta-diff
//!
//! Configuration resolution for reconciling two FASTA multiple-sequence
//! alignments: a *master* collection, assumed aligned and with unique
//! sequence IDs, and an *additional* collection whose records are added to,
//! replace, or remove matching records in the master.
//!
//! This crate is the tool's front end. It turns the raw argument vector into
//! an immutable, validated [`Config`] holding the three opened byte streams
//! (master, additional, output), the selected [`Operation`], the selected
//! [`MatchMode`], and the quiet flag. The reconciliation engine consumes the
//! finished configuration through [`Config::into_parts`]; sequence parsing
//! and the set operations themselves live downstream of this crate.
//!
//! ## Resolution model
//!
//! - Resolution is a single left-to-right scan; each token is consumed
//!   exactly once, as a flag, a flag value, or the sole trailing positional
//!   argument.
//! - Files are opened as a side effect of flag dispatch. Failures surface as
//!   [`ResolveError`] values; the resolver never exits the process, so it is
//!   testable without termination. Only the binary prints diagnostics and
//!   chooses the exit status.
//! - The additional input defaults to standard input and the output to
//!   standard output; the literal path `-` selects the same defaults
//!   explicitly. The master file has no default and must be supplied.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_diff::{resolve, Defaults, Operation};
//!
//! let config = resolve(
//!     ["-m", "master.fa", "-p", "replace", "extra.fa"],
//!     Defaults::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(config.operation(), Operation::Replace);
//! assert!(config.output().is_std());
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: usage/help text and the argument resolver
//! - [`core`]: the configuration record, enumerated settings, and stream wrappers

pub mod cli;
pub mod core;

// Re-export the resolution surface for convenience
pub use cli::resolver::{resolve, ResolveError};
pub use core::config::{Config, Defaults};
pub use core::stream::{InputStream, OutputStream};
pub use core::types::{MatchMode, Operation};
