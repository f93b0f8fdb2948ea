//! Core data types for configuration resolution.
//!
//! This module provides the types the resolver produces and the downstream
//! reconciliation engine consumes:
//!
//! - [`Config`](config::Config): the immutable, validated execution configuration
//! - [`Defaults`](config::Defaults): the explicit table of compiled-in defaults
//! - [`Operation`](types::Operation), [`MatchMode`](types::MatchMode): the
//!   closed enumerated settings selected on the command line
//! - [`InputStream`](stream::InputStream), [`OutputStream`](stream::OutputStream):
//!   ownership wrappers over the opened file resources and the process-standard
//!   streams
//!
//! ## Stream ownership
//!
//! A `Config` owns its three streams exclusively. Files it opened are closed
//! exactly once, when the owning value is dropped, on every exit path; the
//! process-standard streams are never closed by this crate.

pub mod config;
pub mod stream;
pub mod types;
