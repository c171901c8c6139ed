//! # Generic Client
//!
//! This module defines the transport seam ([`GraphQLClient`]) and the generic
//! [`ResourceClient`] that drives any [`ResourceModel`] through one action cycle:
//!
//! 1. Ask the adapter for the action's template.
//! 2. Ask the adapter for its variable bindings, then add `ACCOUNTID` (and the cursor for List).
//! 3. Render the template.
//! 4. Execute it through the transport.
//! 5. Classify the `error` object with the adapter's error key, then extract the result with
//!    its identifier/result keys.
//!
//! Retries, backoff and timeouts are left to the caller.

use crate::framework::action::Action;
use crate::framework::config::ClientConfig;
use crate::framework::entity::{ResourceModel, Variables, ACCOUNT_ID, NEXT_CURSOR};
use crate::framework::error::FrameworkError;
use crate::framework::render::render;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Executes a rendered GraphQL document and returns the decoded `data` body.
///
/// Implementations own HTTP, authentication and the GraphQL envelope; a top-level
/// `errors` array should be reported as [`FrameworkError::Transport`].
#[async_trait]
pub trait GraphQLClient: Send + Sync {
    async fn execute(&self, document: &str) -> Result<Value, FrameworkError>;
}

/// ## ResourceClient
///
/// The `ResourceClient<C>` runs Create/Read/Update/Delete/List for any adapter implementing
/// [`ResourceModel`], over any transport implementing [`GraphQLClient`]. It holds no
/// per-resource state: one adapter value is passed in per call and discarded by the caller
/// afterwards.
pub struct ResourceClient<C: GraphQLClient> {
    client: C,
    config: ClientConfig,
}

impl<C: GraphQLClient> ResourceClient<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates the resource, stores the assigned identifier on `model` and returns it.
    pub async fn create<M: ResourceModel>(&self, model: &mut M) -> Result<String, FrameworkError> {
        let resource_type = resource_type::<M>();
        let data = self.execute(model, Action::Create, model.variables()).await?;
        let payload = self.payload(model, &data)?;

        let key = model.identifier_key(Action::Create);
        let id = find_key(payload, key)
            .and_then(value_to_string)
            .ok_or_else(|| FrameworkError::MissingField(key.to_string()))?;
        model.set_identifier(Some(id.clone()));
        info!(resource_type, %id, "Created");

        self.settle(model, Action::Create).await;
        Ok(id)
    }

    /// Reads the resource by identifier. Returns `None` when the query matched nothing.
    pub async fn read<M: ResourceModel>(&self, model: &M) -> Result<Option<Value>, FrameworkError> {
        let resource_type = resource_type::<M>();
        let id = require_identifier(model, Action::Read)?;
        let data = self.execute(model, Action::Read, model.variables()).await?;
        let page = self.page(model, &data)?;

        let found = page.entities.into_iter().next();
        debug!(resource_type, %id, found = found.is_some(), "Read");
        Ok(found)
    }

    /// Updates the resource in place. The identifier must already be set.
    pub async fn update<M: ResourceModel>(&self, model: &M) -> Result<(), FrameworkError> {
        let resource_type = resource_type::<M>();
        let id = require_identifier(model, Action::Update)?;
        let data = self.execute(model, Action::Update, model.variables()).await?;
        let payload = self.payload(model, &data)?;

        let key = model.result_key(Action::Update);
        if find_key(payload, key).is_none() {
            return Err(FrameworkError::MissingField(key.to_string()));
        }
        info!(resource_type, %id, "Updated");

        self.settle(model, Action::Update).await;
        Ok(())
    }

    /// Deletes the resource and returns every identifier the API reported as removed.
    pub async fn delete<M: ResourceModel>(&self, model: &M) -> Result<Vec<String>, FrameworkError> {
        let resource_type = resource_type::<M>();
        let id = require_identifier(model, Action::Delete)?;
        let data = self.execute(model, Action::Delete, model.variables()).await?;
        let payload = self.payload(model, &data)?;

        let key = model.result_key(Action::Delete);
        let ids: Vec<String> = match find_key(payload, key) {
            Some(Value::Array(items)) => items.iter().filter_map(value_to_string).collect(),
            Some(other) => value_to_string(other).into_iter().collect(),
            None => return Err(FrameworkError::MissingField(key.to_string())),
        };
        if !ids.iter().any(|deleted| deleted == id) {
            warn!(resource_type, %id, ?ids, "Delete response does not mention identifier");
        }
        info!(resource_type, %id, count = ids.len(), "Deleted");

        self.settle(model, Action::Delete).await;
        Ok(ids)
    }

    /// Walks every page of the list query, appending one sibling per entity to `model`.
    ///
    /// Returns the number of entities discovered.
    pub async fn list<M: ResourceModel>(&self, model: &mut M) -> Result<usize, FrameworkError> {
        let resource_type = resource_type::<M>();
        let cursor_key = model
            .list_query_next_cursor()
            .unwrap_or(NEXT_CURSOR)
            .to_string();
        let id_key = model.identifier_key(Action::List).to_string();

        let mut cursor = String::new();
        let mut discovered = 0;
        for page_number in 1..=self.config.max_pages {
            let mut vars = model.variables();
            vars.insert(cursor_key.clone(), cursor.clone());
            let data = self.execute(model, Action::List, vars).await?;
            let page = self.page(model, &data)?;

            for entity in &page.entities {
                match entity.get(&id_key).and_then(value_to_string) {
                    Some(guid) => {
                        let sibling = model.new_model_from_guid(&guid);
                        model.append_to_resource_models(sibling);
                        discovered += 1;
                    }
                    None => warn!(resource_type, key = %id_key, "Entity without identifier skipped"),
                }
            }
            debug!(
                resource_type,
                page = page_number,
                entities = page.entities.len(),
                total = ?page.total_count,
                "Listed page"
            );

            match page.next_cursor {
                Some(next) if !next.is_empty() => cursor = next,
                _ => {
                    info!(resource_type, size = discovered, "Listed");
                    return Ok(discovered);
                }
            }
        }

        warn!(resource_type, max_pages = self.config.max_pages, "Page limit reached");
        Err(FrameworkError::PageLimitExceeded(self.config.max_pages))
    }

    async fn execute<M: ResourceModel>(
        &self,
        model: &M,
        action: Action,
        mut vars: Variables,
    ) -> Result<Value, FrameworkError> {
        let resource_type = resource_type::<M>();
        let template = model
            .template(action)
            .ok_or_else(|| FrameworkError::MissingField(format!("{action} template")))?;

        vars.entry(ACCOUNT_ID.to_string())
            .or_insert_with(|| self.config.account_id.to_string());
        let document = render(template, &vars)?;
        debug!(resource_type, %action, %document, "Executing");

        self.client.execute(&document).await
    }

    /// Locates the mutation payload and fails if its `error` member is populated.
    fn payload<'a, M: ResourceModel>(&self, model: &M, data: &'a Value) -> Result<&'a Value, FrameworkError> {
        let payload = find_object_with(data, "error").unwrap_or(data);
        check_error(model, payload)?;
        Ok(payload)
    }

    fn page<M: ResourceModel>(&self, model: &M, data: &Value) -> Result<Page, FrameworkError> {
        let collection = find_object_with(data, "entities")
            .ok_or_else(|| FrameworkError::MissingField("entities".to_string()))?;
        check_error(model, collection)?;

        Ok(Page {
            entities: collection
                .get("entities")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            next_cursor: collection
                .get("nextCursor")
                .and_then(Value::as_str)
                .map(str::to_string),
            total_count: collection.get("totalCount").and_then(Value::as_u64),
        })
    }

    async fn settle<M: ResourceModel>(&self, model: &M, action: Action) {
        let delay = self.config.propagation_delay();
        if model.needs_propagation_delay(action) && !delay.is_zero() {
            debug!(resource_type = resource_type::<M>(), %action, ?delay, "Waiting for propagation");
            tokio::time::sleep(delay).await;
        }
    }
}

/// One page of a query response.
struct Page {
    entities: Vec<Value>,
    next_cursor: Option<String>,
    total_count: Option<u64>,
}

fn resource_type<M>() -> &'static str {
    std::any::type_name::<M>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

fn require_identifier<M: ResourceModel>(model: &M, action: Action) -> Result<&str, FrameworkError> {
    match model.identifier() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(FrameworkError::MissingIdentifier {
            action: action.to_string(),
        }),
    }
}

fn check_error<M: ResourceModel>(model: &M, container: &Value) -> Result<(), FrameworkError> {
    let Some(error) = container.get("error") else {
        return Ok(());
    };
    match FrameworkError::from_error_object(error, model.error_key()) {
        Some(e) => {
            warn!(resource_type = resource_type::<M>(), error = %e, "API reported an error");
            Err(e)
        }
        None => Ok(()),
    }
}

/// Depth-first search for the first value stored under `key`, skipping `error` members.
fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => {
            if let Some(found) = map.get(key).filter(|v| !v.is_null()) {
                return Some(found);
            }
            map.iter()
                .filter(|(k, _)| k.as_str() != "error")
                .find_map(|(_, v)| find_key(v, key))
        }
        Value::Array(items) => items.iter().find_map(|v| find_key(v, key)),
        _ => None,
    }
}

/// Depth-first search for the first object that has a `key` member.
fn find_object_with<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let map = value.as_object()?;
    if map.contains_key(key) {
        return Some(value);
    }
    map.values().find_map(|v| find_object_with(v, key))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
