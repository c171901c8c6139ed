//! # Destination Adapter
//!
//! > **A resource adapter for reconciling AI notification destinations through GraphQL.**
//!
//! A generic CRUD reconciliation engine manages many unrelated resource types through one
//! uniform Create/Read/Update/Delete/List state machine. What differs between resource types
//! is small but easy to get wrong: the data shape, the GraphQL documents, the variables used to
//! render them, and which response fields carry identifiers, results and errors. This crate
//! supplies those answers for the notification destination resource.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One trait, many resource types
//!
//! The engine depends only on [`ResourceModel`](framework::ResourceModel). Each resource type
//! implements it once. The client, renderer and error classification are written once and reused.
//!
//! ### Templates are data
//!
//! GraphQL documents are string constants with `{{{NAME}}}` placeholders. No GraphQL is parsed
//! or built here; the adapter only declares which bindings exist.
//!
//! ### Adapters never fail
//!
//! Every adapter method is total. Absent fields degrade to empty defaults, and failures are
//! reported by the transport or classified from the response by
//! [`FrameworkError`](framework::FrameworkError).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine Seams ([`framework`])
//! - **Role**: The capability trait, lifecycle actions, template renderer, transport trait and the
//!   client running one action cycle.
//! - **Key items**: [`ResourceModel`](framework::ResourceModel), [`Action`](framework::Action),
//!   [`ResourceClient`](framework::ResourceClient), [`render`](framework::render).
//!
//! ### 2. The Implementation ([`destination`])
//! - **Role**: The notification destination adapter.
//! - **Key items**: [`Destination`](destination::Destination),
//!   [`DestinationPayload`](destination::DestinationPayload).
//!
//! ### 3. Setup ([`lifecycle`])
//! - **Role**: Tracing initialization.
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for an in-memory transport that records rendered documents.
//!
//! ```bash
//! cargo test
//! ```

pub mod destination;
pub mod framework;
pub mod lifecycle;
