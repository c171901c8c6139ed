//! Process-level setup shared by binaries and tests embedding the adapter.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use self::tracing::*;
