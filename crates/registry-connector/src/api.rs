use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{ApiService, PageQuery, ResolverError, ResolverResult};
use registry_types::{
    ApiDefinition, ApiDefinitionInput, ApiSpec, ApiSpecInput, Auth, AuthInput, Id, Page,
    RuntimeAuth,
};
use tokio::sync::RwLock;

use crate::paginate::paginate;
use crate::state::{ConnectorState, SpecSource};

/// API definition store: lifecycle, spec refetch against a declared source,
/// and runtime auth bindings gated by the entitlement set.
#[derive(Clone)]
pub struct ApiConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl ApiConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        ApiConnector { state }
    }
}

fn spec_from_input(input: &ApiSpecInput) -> ApiSpec {
    ApiSpec {
        data: input.data.clone(),
        format: input.format,
    }
}

/// Registers (or clears) the spec source declared by the input.
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
impl ApiService for ApiConnector {
    async fn add(
        &self,
        application_id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition> {
        let mut state = self.state.write().await;
        if !state.applications.contains_key(application_id) {
            return Err(ResolverError::not_found("application", application_id));
        }
        let id = state.next_id("api");
        register_spec_source(&mut state, &id, input.spec.as_ref());
        let api = ApiDefinition {
            id: id.clone(),
            application_id: application_id.clone(),
            name: input.name,
            target_url: input.target_url,
            group: input.group,
            spec: input.spec.as_ref().map(spec_from_input),
        };
        state.apis.insert(id, api.clone());
        Ok(api)
    }

    async fn update(&self, id: &Id, input: ApiDefinitionInput) -> ResolverResult<ApiDefinition> {
        let mut state = self.state.write().await;
        if !state.apis.contains_key(id) {
            return Err(ResolverError::not_found("api", id));
        }
        register_spec_source(&mut state, id, input.spec.as_ref());
        let api = state
            .apis
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("api", id))?;
        api.name = input.name;
        api.target_url = input.target_url;
        api.group = input.group;
        api.spec = input.spec.as_ref().map(spec_from_input);
        Ok(api.clone())
    }

    async fn delete(&self, id: &Id) -> ResolverResult<ApiDefinition> {
        let mut state = self.state.write().await;
        let snapshot = state
            .apis
            .remove(id)
            .ok_or_else(|| ResolverError::not_found("api", id))?;
        state.spec_sources.remove(id);
        state.runtime_auths.retain(|(api_id, _), _| api_id != id);
        Ok(snapshot)
    }

    async fn refetch_spec(&self, id: &Id) -> ResolverResult<ApiSpec> {
        let mut state = self.state.write().await;
        if !state.apis.contains_key(id) {
            return Err(ResolverError::not_found("api", id));
        }
        let spec = fetch_spec(&state, id)?;
        let api = state
            .apis
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("api", id))?;
        api.spec = Some(spec.clone());
        Ok(spec)
    }

    async fn set_auth(
        &self,
        api_id: &Id,
        runtime_id: &Id,
        input: AuthInput,
    ) -> ResolverResult<RuntimeAuth> {
        let mut state = self.state.write().await;
        if !state.apis.contains_key(api_id) {
            return Err(ResolverError::not_found("api", api_id));
        }
        if !state.runtimes.contains_key(runtime_id) {
            return Err(ResolverError::not_found("runtime", runtime_id));
        }
        let pair = (api_id.clone(), runtime_id.clone());
        if !state.entitlements.contains(&pair) {
            return Err(ResolverError::NotEntitled {
                api_id: api_id.clone(),
                runtime_id: runtime_id.clone(),
            });
        }
        let auth = RuntimeAuth {
            runtime_id: runtime_id.clone(),
            api_id: api_id.clone(),
            auth: Auth {
                credential: input.credential,
            },
        };
        state.runtime_auths.insert(pair, auth.clone());
        Ok(auth)
    }

    async fn delete_auth(&self, api_id: &Id, runtime_id: &Id) -> ResolverResult<RuntimeAuth> {
        let mut state = self.state.write().await;
        let pair = (api_id.clone(), runtime_id.clone());
        state
            .runtime_auths
            .remove(&pair)
            .ok_or(ResolverError::NotFound {
                kind: "runtime auth",
                id: format!("{api_id}:{runtime_id}"),
            })
    }

    async fn list_for_application(
        &self,
        application_id: &Id,
        group: Option<String>,
        page: PageQuery,
    ) -> ResolverResult<Page<ApiDefinition>> {
        let state = self.state.read().await;
        let matching: Vec<ApiDefinition> = state
            .apis
            .values()
            .filter(|api| api.application_id == *application_id)
            .filter(|api| {
                group
                    .as_deref()
                    .is_none_or(|g| api.group.as_deref() == Some(g))
            })
            .cloned()
            .collect();
        paginate(&matching, &page)
    }
}

/// Simulated retrieval from the declared source. Fails when no source is
/// declared or the source is marked unreachable; the caller's stored spec
/// is untouched on failure.
pub(crate) fn fetch_spec(state: &ConnectorState, id: &Id) -> ResolverResult<ApiSpec> {
    let source = state
        .spec_sources
        .get(id)
        .ok_or_else(|| ResolverError::Upstream {
            message: format!("{id} has no declared spec source"),
        })?;
    if !source.reachable {
        return Err(ResolverError::Upstream {
            message: format!("spec source {} is unreachable", source.url),
        });
    }
    Ok(ApiSpec {
        data: source.document.clone(),
        format: source.format,
    })
}
