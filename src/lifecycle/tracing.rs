//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Action cycles**: every rendered document at `debug`, completed Create/Update/Delete/List at `info`
//! - **List traversals**: one `debug` line per page with entity and total counts
//! - **API errors**: classified `error` payloads at `warn`, with the resource type
//!
//! ## Usage Examples
//!
//! ```bash
//! # Completed actions only
//! RUST_LOG=info cargo test
//!
//! # Rendered GraphQL documents and page details
//! RUST_LOG=debug cargo test
//!
//! # Filter to the framework
//! RUST_LOG=destination_adapter::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=info` a create followed by a list looks like:
//!
//! ```text
//! INFO Created resource_type="DestinationPayload" id="d-1"
//! INFO Listed resource_type="DestinationPayload" size=3
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed (e.g. by another test).
pub fn setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // resource_type is carried as a field instead
        .compact()
        .try_init()
        .is_ok()
}
