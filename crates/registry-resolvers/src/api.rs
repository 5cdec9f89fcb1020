use std::sync::Arc;

use registry_types::{ApiDefinition, ApiDefinitionInput, ApiSpec, AuthInput, Id, RuntimeAuth};
use tracing::debug;

use crate::error::ResolverResult;
use crate::services::ApiService;
use crate::validate::require_non_empty;

/// Resolver for API definitions: lifecycle, spec refetch and runtime auth
/// binding.
pub struct ApiResolver {
    service: Arc<dyn ApiService>,
}

impl ApiResolver {
    pub fn new(service: Arc<dyn ApiService>) -> Self {
        ApiResolver { service }
    }

    pub async fn add(
        &self,
        application_id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition> {
        validate_input(&input)?;
        self.service.add(application_id, input).await
    }

    pub async fn update(
        &self,
        id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition> {
        validate_input(&input)?;
        self.service.update(id, input).await
    }

    pub async fn delete(&self, id: &Id) -> ResolverResult<ApiDefinition> {
        self.service.delete(id).await
    }

    /// Blocks until the upstream retrieval completes or fails; an upstream
    /// failure is surfaced as-is, never papered over with the stored spec.
    pub async fn refetch_spec(&self, id: &Id) -> ResolverResult<ApiSpec> {
        debug!(%id, "refetching api spec");
        self.service.refetch_spec(id).await
    }

    pub async fn set_auth(
        &self,
        api_id: &Id,
        runtime_id: &Id,
        input: AuthInput,
    ) -> ResolverResult<RuntimeAuth> {
        debug!(%api_id, %runtime_id, "binding runtime auth");
        self.service.set_auth(api_id, runtime_id, input).await
    }

    pub async fn delete_auth(&self, api_id: &Id, runtime_id: &Id) -> ResolverResult<RuntimeAuth> {
        self.service.delete_auth(api_id, runtime_id).await
    }
}

fn validate_input(input: &ApiDefinitionInput) -> ResolverResult<()> {
    require_non_empty("api", "name", &input.name)?;
    require_non_empty("api", "target_url", &input.target_url)
}
