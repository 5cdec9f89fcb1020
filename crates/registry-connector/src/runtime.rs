use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{LabeledEntityService, PageQuery, ResolverError, ResolverResult};
use registry_types::{Id, LabelFilter, Page, Runtime, RuntimeInput};
use tokio::sync::RwLock;

use crate::labeled;
use crate::state::ConnectorState;

/// Runtime store. `RuntimeService` comes for free via the blanket marker
/// impl once the labeled-entity contract is in place.
#[derive(Clone)]
pub struct RuntimeConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl RuntimeConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        RuntimeConnector { state }
    }
}

#[async_trait]
impl LabeledEntityService for RuntimeConnector {
    type Entity = Runtime;
    type Input = RuntimeInput;

    async fn list(
        &self,
        filter: Vec<LabelFilter>,
        page: PageQuery,
    ) -> ResolverResult<Page<Runtime>> {
        let state = self.state.read().await;
        labeled::list(&state.runtimes, &filter, &page)
    }

    async fn get(&self, id: &Id) -> ResolverResult<Runtime> {
        let state = self.state.read().await;
        labeled::get(&state.runtimes, id)
    }

    async fn create(&self, input: RuntimeInput) -> ResolverResult<Runtime> {
        let mut state = self.state.write().await;
        let id = state.next_id("runtime");
        let runtime = Runtime {
            id: id.clone(),
            name: input.name,
            description: input.description,
            labels: input.labels.unwrap_or_default(),
            annotations: input.annotations.unwrap_or_default(),
        };
        state.runtimes.insert(id, runtime.clone());
        Ok(runtime)
    }

    async fn update(&self, id: &Id, input: RuntimeInput) -> ResolverResult<Runtime> {
        let mut state = self.state.write().await;
        let runtime = state
            .runtimes
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("runtime", id))?;
        runtime.name = input.name;
        runtime.description = input.description;
        if let Some(labels) = input.labels {
            runtime.labels = labels;
        }
        if let Some(annotations) = input.annotations {
            runtime.annotations = annotations;
        }
        Ok(runtime.clone())
    }

    async fn delete(&self, id: &Id) -> ResolverResult<Runtime> {
        let mut state = self.state.write().await;
        labeled::delete(&mut state.runtimes, id)
    }

    async fn add_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        let mut state = self.state.write().await;
        labeled::add_label(&mut state.runtimes, id, key, values)
    }

    async fn delete_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        let mut state = self.state.write().await;
        labeled::delete_label(&mut state.runtimes, id, key, values)
    }

    async fn set_annotation(&self, id: &Id, key: &str, value: String) -> ResolverResult<String> {
        let mut state = self.state.write().await;
        labeled::set_annotation(&mut state.runtimes, id, key, value)
    }

    async fn delete_annotation(&self, id: &Id, key: &str) -> ResolverResult<Option<String>> {
        let mut state = self.state.write().await;
        labeled::delete_annotation(&mut state.runtimes, id, key)
    }
}
