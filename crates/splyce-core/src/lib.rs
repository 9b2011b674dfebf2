//! splyce core: transport-agnostic sample protocol and error types.
//!
//! This crate defines the line protocol spoken by metric senders and the error
//! surface shared by the bridge. It carries no transport or runtime
//! dependencies so the parser can be reused and tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Senders are untrusted and noisy; every malformed line must surface as a
//! `SplyceError` instead of taking the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SplyceError};
