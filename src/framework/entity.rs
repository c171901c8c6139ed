//! # ResourceModel Trait
//!
//! The `ResourceModel` trait defines the contract that every resource type must implement to be
//! driven by the generic reconciliation client. It covers identity, tags, GraphQL templates,
//! variable bindings and the per-action policy hooks the engine consults.
//!
//! # Architecture Note
//! The engine only ever talks to this trait. Adding a new resource type means writing one new
//! implementation (its data shape, its five GraphQL documents and a handful of policy answers)
//! without touching the engine.
//!
//! # Provided Methods (Hooks)
//! Most resource types agree on the following, so the trait provides defaults:
//! - [`ResourceModel::identifier_key`] - `"id"` for every action
//! - [`ResourceModel::tag_identifier`], [`ResourceModel::tags`], [`ResourceModel::has_tags`] - inert tagging
//! - [`ResourceModel::list_query_next_cursor`] - no override of the engine's cursor binding
//! - [`ResourceModel::needs_propagation_delay`] - wait after every action
//!
//! Override them when a resource type differs, e.g. when its delete response carries the
//! identifier under a different field name.

use crate::framework::action::Action;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Debug, Display};

/// String-to-string bindings used to render a template.
pub type Variables = HashMap<String, String>;

/// Binding for the resource identifier.
pub const ID: &str = "ID";
/// Binding for the caller-supplied GraphQL input fragment.
pub const FRAGMENT: &str = "FRAGMENT";
/// Binding for the list filter expression.
pub const LIST_QUERY_FILTER: &str = "LISTQUERYFILTER";
/// Binding injected by the engine, never by an adapter.
pub const ACCOUNT_ID: &str = "ACCOUNTID";
/// Default binding for the pagination cursor of list queries.
pub const NEXT_CURSOR: &str = "NEXTCURSOR";

/// Trait that any resource type must implement to be reconciled through GraphQL.
///
/// One value of the implementing type wraps exactly one resource instance (the
/// [`Model`](ResourceModel::Model)) plus, during a List traversal, the siblings discovered so far.
/// None of these methods fail: absent fields degrade to empty defaults, and every failure of the
/// remote call is detected by the caller using the keys declared here.
pub trait ResourceModel: Send + Sync + Sized + 'static {
    /// The plain data shape of one resource instance.
    type Model: Clone + Debug + Serialize + Send + Sync;

    // --- Identity ---

    /// Stores the identifier assigned by the remote system. Overwrites any prior value.
    fn set_identifier(&mut self, identifier: Option<String>);

    fn identifier(&self) -> Option<&str>;

    /// Field name holding the identifier in a GraphQL response for `action`.
    fn identifier_key(&self, _action: Action) -> &str {
        "id"
    }

    fn tag_identifier(&self) -> &str {
        ""
    }

    // --- Accumulation ---

    fn resource_model(&self) -> &Self::Model;

    /// Models collected so far during a List traversal, in discovery order.
    fn resource_models(&self) -> &[Self::Model];

    /// Appends the model wrapped by `other` to this traversal's collection.
    fn append_to_resource_models(&mut self, other: Self);

    /// Builds a minimal value whose only populated field is the identifier `guid`.
    fn new_model_from_guid(&self, guid: &dyn Display) -> Self;

    // --- Tags ---

    fn tags(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn has_tags(&self) -> bool {
        false
    }

    // --- Templates ---

    fn create_mutation(&self) -> &str;
    fn update_mutation(&self) -> &str;
    fn delete_mutation(&self) -> &str;
    fn read_query(&self) -> &str;
    fn list_query(&self) -> &str;

    /// Returns the template the engine renders for `action`, if the action has one.
    fn template(&self, action: Action) -> Option<&str> {
        match action {
            Action::Create => Some(self.create_mutation()),
            Action::Read => Some(self.read_query()),
            Action::Update => Some(self.update_mutation()),
            Action::Delete => Some(self.delete_mutation()),
            Action::List => Some(self.list_query()),
            _ => None,
        }
    }

    // --- Variables ---

    fn graphql_fragment(&self) -> Option<&str>;

    /// Derives the template bindings from the current model.
    ///
    /// Must return a fresh map on every call; callers are free to mutate it.
    fn variables(&self) -> Variables;

    /// Variable name the previous page's `nextCursor` is bound to.
    ///
    /// `None` means the engine binds its default, [`NEXT_CURSOR`].
    fn list_query_next_cursor(&self) -> Option<&str> {
        None
    }

    // --- Result extraction ---

    /// Field of an `error` object whose value classifies the failure.
    fn error_key(&self) -> &str;

    /// Field holding the success payload for `action`.
    fn result_key(&self, action: Action) -> &str;

    // --- Eventual consistency ---

    /// Whether the engine must wait before trusting a read that follows `action`.
    fn needs_propagation_delay(&self, _action: Action) -> bool {
        true
    }
}
