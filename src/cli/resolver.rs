//! Left-to-right resolution of the argument vector into a [`Config`].
//!
//! Each token is consumed exactly once: as a flag name, as the value of the
//! preceding flag, or as the sole trailing positional argument. File
//! resources are opened as a side effect of flag dispatch, not in a deferred
//! validation pass, so a stream replaced later in the scan is dropped (and
//! closed) at the point of replacement.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::{Config, Defaults};
use crate::core::stream::{InputStream, OutputStream};
use crate::core::types::{MatchMode, Operation};

#[derive(Error, Debug)]
pub enum ResolveError {
    /// `-h`/`--help` was given; the caller prints usage and help without
    /// error framing and exits with status 1.
    #[error("help requested")]
    Help,

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("ran out of command line arguments")]
    RanOutOfArguments,

    #[error("Required argument MASTER FILE was not provided")]
    MasterNotProvided,

    #[error("failed to open the MASTER file {path}: {source}")]
    OpenMaster {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open the INPUT file {path}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open the OUTPUT file {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid file operation: {0}")]
    InvalidOperation(String),

    #[error("invalid match mode: {0}")]
    InvalidMatchMode(String),
}

/// Resolve the argument vector (program name already stripped) into a
/// validated [`Config`].
///
/// Recognized flags: `-h`/`--help`, `-o OUTPUT`, `-m MASTER`, `-p OPERATION`,
/// `-t MATCH`, `-q`. A token that is not a flag is the additional-collection
/// path and is accepted only as the final token; the literal token `-` stands
/// for standard input there (and for standard output after `-o`).
///
/// # Errors
///
/// Returns a [`ResolveError`] describing the first malformed token, missing
/// value, failed open, or invalid enumerated value encountered, or
/// [`ResolveError::MasterNotProvided`] if the scan completes without a master
/// path. No partially resolved configuration escapes: streams opened before
/// the failure are dropped with it.
pub fn resolve<I, S>(args: I, defaults: Defaults) -> Result<Config, ResolveError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    let mut master: Option<InputStream> = None;
    let mut additional = InputStream::stdin();
    let mut output = OutputStream::stdout();
    let mut operation = defaults.operation;
    let mut match_mode = defaults.match_mode;
    let mut quiet = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if let Some(name) = arg.strip_prefix("--") {
            if name == "help" {
                return Err(ResolveError::Help);
            }
            return Err(ResolveError::UnknownArgument(arg.clone()));
        } else if let Some(name) = arg.strip_prefix('-').filter(|n| !n.is_empty()) {
            // A bare `-` falls through to the positional branch below.
            match name {
                "h" => return Err(ResolveError::Help),
                "o" => output = resolve_output(next_value(&args, &mut i)?)?,
                "m" => master = Some(resolve_master(next_value(&args, &mut i)?)?),
                "p" => operation = resolve_operation(next_value(&args, &mut i)?)?,
                "t" => match_mode = resolve_match_mode(next_value(&args, &mut i)?)?,
                "q" => quiet = true,
                _ => return Err(ResolveError::UnknownArgument(arg.clone())),
            }
        } else if i + 1 == args.len() {
            additional = resolve_additional(arg)?;
        } else {
            // At most one positional argument, and only as the final token.
            return Err(ResolveError::UnknownArgument(arg.clone()));
        }

        i += 1;
    }

    let Some(master) = master else {
        return Err(ResolveError::MasterNotProvided);
    };

    Ok(Config::new(
        master, additional, output, operation, match_mode, quiet,
    ))
}

/// Consume the value token following a flag.
fn next_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ResolveError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(ResolveError::RanOutOfArguments)
}

fn resolve_output(value: &str) -> Result<OutputStream, ResolveError> {
    if value == "-" {
        return Ok(OutputStream::stdout());
    }
    OutputStream::create(value).map_err(|source| ResolveError::OpenOutput {
        path: value.into(),
        source,
    })
}

fn resolve_additional(value: &str) -> Result<InputStream, ResolveError> {
    if value == "-" {
        return Ok(InputStream::stdin());
    }
    InputStream::open(value).map_err(|source| ResolveError::OpenInput {
        path: value.into(),
        source,
    })
}

fn resolve_master(value: &str) -> Result<InputStream, ResolveError> {
    InputStream::open(value).map_err(|source| ResolveError::OpenMaster {
        path: value.into(),
        source,
    })
}

fn resolve_operation(value: &str) -> Result<Operation, ResolveError> {
    Operation::parse(value).ok_or_else(|| ResolveError::InvalidOperation(value.to_string()))
}

fn resolve_match_mode(value: &str) -> Result<MatchMode, ResolveError> {
    MatchMode::parse(value).ok_or_else(|| ResolveError::InvalidMatchMode(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn fasta_fixture(records: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".fa").unwrap();
        file.write_all(records.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn resolve_from(args: &[&str]) -> Result<Config, ResolveError> {
        resolve(args.iter().copied(), Defaults::default())
    }

    #[test]
    fn test_master_only_uses_defaults() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let master_path = master.path().to_str().unwrap();

        let config = resolve_from(&["-m", master_path]).unwrap();
        assert_eq!(config.master().path(), Some(master.path()));
        assert!(config.additional().is_std());
        assert!(config.output().is_std());
        assert_eq!(config.operation(), Operation::Add);
        assert_eq!(config.match_mode(), MatchMode::Id);
        assert!(!config.quiet());
    }

    #[test]
    fn test_full_invocation() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let extra = fasta_fixture(">seq2\nTTAA\n");
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.fa");

        let config = resolve_from(&[
            "-m",
            master.path().to_str().unwrap(),
            "-p",
            "replace",
            "-t",
            "id_sequence",
            "-q",
            "-o",
            out.to_str().unwrap(),
            extra.path().to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(config.operation(), Operation::Replace);
        assert_eq!(config.match_mode(), MatchMode::IdSequence);
        assert!(config.quiet());
        assert_eq!(config.additional().path(), Some(extra.path()));
        assert_eq!(config.output().path(), Some(out.as_path()));
        // The output file is created as a side effect of flag dispatch.
        assert!(out.exists());
    }

    #[test]
    fn test_defaults_table_override() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let defaults = Defaults {
            operation: Operation::Remove,
            match_mode: MatchMode::IdSequence,
        };

        let config = resolve(
            ["-m", master.path().to_str().unwrap()].into_iter(),
            defaults,
        )
        .unwrap();
        assert_eq!(config.operation(), Operation::Remove);
        assert_eq!(config.match_mode(), MatchMode::IdSequence);
    }

    #[test]
    fn test_missing_master_is_fatal() {
        assert!(matches!(
            resolve_from(&[]),
            Err(ResolveError::MasterNotProvided)
        ));
        assert!(matches!(
            resolve_from(&["-p", "add"]),
            Err(ResolveError::MasterNotProvided)
        ));
        assert!(matches!(
            resolve_from(&["-q"]),
            Err(ResolveError::MasterNotProvided)
        ));
        // A lone `-` is the positional stdin designator, not a master file.
        assert!(matches!(
            resolve_from(&["-"]),
            Err(ResolveError::MasterNotProvided)
        ));
    }

    #[test]
    fn test_invalid_operation_names_token() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let err = resolve_from(&["-m", master.path().to_str().unwrap(), "-p", "bogus"])
            .unwrap_err();
        match err {
            ResolveError::InvalidOperation(token) => assert_eq!(token, "bogus"),
            other => panic!("expected InvalidOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_match_mode_names_token() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let err = resolve_from(&["-m", master.path().to_str().unwrap(), "-t", "wrong"])
            .unwrap_err();
        match err {
            ResolveError::InvalidMatchMode(token) => assert_eq!(token, "wrong"),
            other => panic!("expected InvalidMatchMode, got {other:?}"),
        }
    }

    #[test]
    fn test_operation_tokens_are_case_sensitive() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let err = resolve_from(&["-m", master.path().to_str().unwrap(), "-p", "Add"])
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidOperation(_)));
    }

    #[test]
    fn test_value_flag_as_final_token() {
        for flag in ["-o", "-m", "-p", "-t"] {
            let err = resolve_from(&[flag]).unwrap_err();
            assert!(
                matches!(err, ResolveError::RanOutOfArguments),
                "expected RanOutOfArguments for trailing {flag}"
            );
        }
    }

    #[test]
    fn test_positional_must_be_final_token() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let master_path = master.path().to_str().unwrap();

        // Positional before trailing flags
        let err = resolve_from(&["extra.fa", "-m", master_path]).unwrap_err();
        match err {
            ResolveError::UnknownArgument(token) => assert_eq!(token, "extra.fa"),
            other => panic!("expected UnknownArgument, got {other:?}"),
        }

        // Two positionals: the first is not in final position
        let err = resolve_from(&["-m", master_path, "a.fa", "b.fa"]).unwrap_err();
        match err {
            ResolveError::UnknownArgument(token) => assert_eq!(token, "a.fa"),
            other => panic!("expected UnknownArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_flags() {
        for arg in ["-z", "-qx", "-hx", "--verbose", "--"] {
            let err = resolve_from(&[arg]).unwrap_err();
            match err {
                ResolveError::UnknownArgument(token) => assert_eq!(token, arg),
                other => panic!("expected UnknownArgument for {arg}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_help_short_and_long() {
        assert!(matches!(resolve_from(&["-h"]), Err(ResolveError::Help)));
        assert!(matches!(resolve_from(&["--help"]), Err(ResolveError::Help)));
        // Help wins even when the rest of the invocation would be valid
        let master = fasta_fixture(">seq1\nACGT\n");
        assert!(matches!(
            resolve_from(&["-h", "-m", master.path().to_str().unwrap()]),
            Err(ResolveError::Help)
        ));
    }

    #[test]
    fn test_output_dash_matches_omitted() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let master_path = master.path().to_str().unwrap();

        let explicit = resolve_from(&["-m", master_path, "-o", "-"]).unwrap();
        let omitted = resolve_from(&["-m", master_path]).unwrap();
        assert!(explicit.output().is_std());
        assert!(omitted.output().is_std());
    }

    #[test]
    fn test_positional_dash_is_stdin() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let config = resolve_from(&["-m", master.path().to_str().unwrap(), "-"]).unwrap();
        assert!(config.additional().is_std());
    }

    #[test]
    fn test_master_open_failure_names_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.fa");
        let err = resolve_from(&["-m", missing.to_str().unwrap()]).unwrap_err();
        match &err {
            ResolveError::OpenMaster { path, .. } => assert_eq!(path, &missing),
            other => panic!("expected OpenMaster, got {other:?}"),
        }
        assert!(err.to_string().contains("MASTER"));
        assert!(err.to_string().contains("absent.fa"));
    }

    #[test]
    fn test_additional_open_failure_names_path() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.fa");
        let err = resolve_from(&[
            "-m",
            master.path().to_str().unwrap(),
            missing.to_str().unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, ResolveError::OpenInput { .. }));
    }

    #[test]
    fn test_output_open_failure_names_path() {
        let master = fasta_fixture(">seq1\nACGT\n");
        let dir = TempDir::new().unwrap();
        let unwritable = dir.path().join("no_such_dir").join("out.fa");
        let err = resolve_from(&[
            "-m",
            master.path().to_str().unwrap(),
            "-o",
            unwritable.to_str().unwrap(),
        ])
        .unwrap_err();
        match &err {
            ResolveError::OpenOutput { path, .. } => assert_eq!(path, &unwritable),
            other => panic!("expected OpenOutput, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_master_keeps_last() {
        let first = fasta_fixture(">seq1\nACGT\n");
        let second = fasta_fixture(">seq2\nTTAA\n");
        let config = resolve_from(&[
            "-m",
            first.path().to_str().unwrap(),
            "-m",
            second.path().to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(config.master().path(), Some(second.path()));
    }
}
