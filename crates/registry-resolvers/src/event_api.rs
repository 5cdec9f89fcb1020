use std::sync::Arc;

use registry_types::{EventApiDefinition, EventApiDefinitionInput, EventApiSpec, Id};
use tracing::debug;

use crate::error::ResolverResult;
use crate::services::EventApiService;
use crate::validate::require_non_empty;

/// Resolver for event API definitions.
pub struct EventApiResolver {
    service: Arc<dyn EventApiService>,
}

impl EventApiResolver {
    pub fn new(service: Arc<dyn EventApiService>) -> Self {
        EventApiResolver { service }
    }

    pub async fn add(
        &self,
        application_id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        require_non_empty("event api", "name", &input.name)?;
        self.service.add(application_id, input).await
    }

    pub async fn update(
        &self,
        id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        require_non_empty("event api", "name", &input.name)?;
        self.service.update(id, input).await
    }

    pub async fn delete(&self, id: &Id) -> ResolverResult<EventApiDefinition> {
        self.service.delete(id).await
    }

    pub async fn refetch_spec(&self, id: &Id) -> ResolverResult<EventApiSpec> {
        debug!(%id, "refetching event api spec");
        self.service.refetch_spec(id).await
    }
}
