//! Velocity core: transport-agnostic primitives shared by the gateway.
//!
//! This crate owns the process-wide request counter, the user record served
//! by the API, and the error surface. It carries no HTTP or runtime
//! dependencies so the same types can be exercised from plain unit tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VelocityError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, VelocityError};
pub use counter::RequestCounter;
