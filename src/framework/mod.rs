//! Generic reconciliation framework for GraphQL-managed resources.
//!
//! This module provides the engine-facing building blocks every resource adapter plugs into.
//!
//! # Main Components
//!
//! - [`ResourceModel`] - Trait that resource adapters implement
//! - [`Action`] - The lifecycle actions the engine drives
//! - [`ResourceClient`] - Runs one action cycle for any adapter over any transport
//! - [`GraphQLClient`] - The transport seam
//! - [`render`] - `{{{KEY}}}` template substitution
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for an in-memory transport.

pub mod action;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod mock;
pub mod render;

// Re-export core types for convenience
pub use action::Action;
pub use client::{GraphQLClient, ResourceClient};
pub use config::ClientConfig;
pub use entity::{ResourceModel, Variables};
pub use error::{FieldMessage, FrameworkError};
pub use render::{placeholders, render};
