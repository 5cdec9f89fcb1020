use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{EventApiService, PageQuery, ResolverError, ResolverResult};
use registry_types::{
    ApiSpecInput, EventApiDefinition, EventApiDefinitionInput, EventApiSpec, Id, Page,
};
use tokio::sync::RwLock;

use crate::api::fetch_spec;
use crate::paginate::paginate;
use crate::state::{ConnectorState, SpecSource};

/// Event API definition store. Shares the spec-source mechanics with the
/// API connector; event APIs carry no auth bindings.
#[derive(Clone)]
pub struct EventApiConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl EventApiConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        EventApiConnector { state }
    }
}

fn spec_from_input(input: &ApiSpecInput) -> EventApiSpec {
    EventApiSpec {
        data: input.data.clone(),
        format: input.format,
    }
}

fn register_spec_source(state: &mut ConnectorState, id: &Id, spec: Option<&ApiSpecInput>) {
    match spec.and_then(|s| s.fetch_from.as_ref().map(|url| (s, url))) {
        Some((spec, url)) => {
            state.spec_sources.insert(
                id.clone(),
                SpecSource {
                    url: url.clone(),
                    reachable: true,
                    document: spec.data.clone(),
                    format: spec.format,
                },
            );
        }
        None => {
            state.spec_sources.remove(id);
        }
    }
}

#[async_trait]
impl EventApiService for EventApiConnector {
    async fn add(
        &self,
        application_id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        let mut state = self.state.write().await;
        if !state.applications.contains_key(application_id) {
            return Err(ResolverError::not_found("application", application_id));
        }
        let id = state.next_id("eventapi");
        register_spec_source(&mut state, &id, input.spec.as_ref());
        let event_api = EventApiDefinition {
            id: id.clone(),
            application_id: application_id.clone(),
            name: input.name,
            group: input.group,
            spec: input.spec.as_ref().map(spec_from_input),
        };
        state.event_apis.insert(id, event_api.clone());
        Ok(event_api)
    }

    async fn update(
        &self,
        id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        let mut state = self.state.write().await;
        if !state.event_apis.contains_key(id) {
            return Err(ResolverError::not_found("event api", id));
        }
        register_spec_source(&mut state, id, input.spec.as_ref());
        let event_api = state
            .event_apis
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("event api", id))?;
        event_api.name = input.name;
        event_api.group = input.group;
        event_api.spec = input.spec.as_ref().map(spec_from_input);
        Ok(event_api.clone())
    }

    async fn delete(&self, id: &Id) -> ResolverResult<EventApiDefinition> {
        let mut state = self.state.write().await;
        let snapshot = state
            .event_apis
            .remove(id)
            .ok_or_else(|| ResolverError::not_found("event api", id))?;
        state.spec_sources.remove(id);
        Ok(snapshot)
    }

    async fn refetch_spec(&self, id: &Id) -> ResolverResult<EventApiSpec> {
        let mut state = self.state.write().await;
        if !state.event_apis.contains_key(id) {
            return Err(ResolverError::not_found("event api", id));
        }
        let spec = fetch_spec(&state, id)?;
        let spec = EventApiSpec {
            data: spec.data,
            format: spec.format,
        };
        let event_api = state
            .event_apis
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("event api", id))?;
        event_api.spec = Some(spec.clone());
        Ok(spec)
    }

    async fn list_for_application(
        &self,
        application_id: &Id,
        group: Option<String>,
        page: PageQuery,
    ) -> ResolverResult<Page<EventApiDefinition>> {
        let state = self.state.read().await;
        let matching: Vec<EventApiDefinition> = state
            .event_apis
            .values()
            .filter(|event_api| event_api.application_id == *application_id)
            .filter(|event_api| {
                group
                    .as_deref()
                    .is_none_or(|g| event_api.group.as_deref() == Some(g))
            })
            .cloned()
            .collect();
        paginate(&matching, &page)
    }
}
