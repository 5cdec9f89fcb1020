//! Collaborator seams: one service trait per entity kind. Each service owns
//! persistence, ordering and cursor issuance for its kind; the resolver
//! layer validates argument shapes and delegates.

use std::collections::BTreeSet;

use async_trait::async_trait;
use registry_types::{
    ApiDefinition, ApiDefinitionInput, ApiSpec, Application, ApplicationInput, AuthInput,
    Document, DocumentInput, EventApiDefinition, EventApiDefinitionInput, EventApiSpec,
    HealthCheck, HealthCheckType, Id, LabelFilter, Page, Runtime, RuntimeAuth, RuntimeInput,
    Webhook, WebhookInput,
};

use crate::error::ResolverResult;
use crate::page_query::PageQuery;
use crate::validate::ValidInput;

/// The paginated, labeled, annotated entity contract. Application and
/// runtime services both implement it; the entity-specific service is the
/// sole variation point, so the uniform list/lifecycle/label/annotation
/// behavior is specified (and resolved) exactly once.
#[async_trait]
pub trait LabeledEntityService: Send + Sync {
    type Entity: Send + Sync;
    type Input: ValidInput + Send + Sync;

    /// Lists entities matching every filter (AND across filters, OR within
    /// one filter's values), in the service's stable order.
    async fn list(
        &self,
        filter: Vec<LabelFilter>,
        page: PageQuery,
    ) -> ResolverResult<Page<Self::Entity>>;

    async fn get(&self, id: &Id) -> ResolverResult<Self::Entity>;

    async fn create(&self, input: Self::Input) -> ResolverResult<Self::Entity>;

    async fn update(&self, id: &Id, input: Self::Input) -> ResolverResult<Self::Entity>;

    /// Deletes the entity, returning its last known snapshot.
    async fn delete(&self, id: &Id) -> ResolverResult<Self::Entity>;

    /// Unions `values` into the label set under `key`; returns the full
    /// resulting set. Idempotent.
    async fn add_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>>;

    /// Removes `values` from the label set under `key`; returns the
    /// resulting set. Idempotent.
    async fn delete_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>>;

    /// Overwrites the annotation under `key`; returns the stored value.
    async fn set_annotation(&self, id: &Id, key: &str, value: String) -> ResolverResult<String>;

    /// Removes the annotation under `key`; returns the prior value, or
    /// `None` if the key was absent. Absence is not an error.
    async fn delete_annotation(&self, id: &Id, key: &str) -> ResolverResult<Option<String>>;
}

#[async_trait]
pub trait ApplicationService:
    LabeledEntityService<Entity = Application, Input = ApplicationInput>
{
    async fn add_webhook(&self, application_id: &Id, input: WebhookInput)
        -> ResolverResult<Webhook>;

    /// Webhooks are addressed by their own ID once created.
    async fn update_webhook(&self, webhook_id: &Id, input: WebhookInput)
        -> ResolverResult<Webhook>;

    async fn delete_webhook(&self, webhook_id: &Id) -> ResolverResult<Webhook>;
}

pub trait RuntimeService: LabeledEntityService<Entity = Runtime, Input = RuntimeInput> {}

impl<S> RuntimeService for S where
    S: LabeledEntityService<Entity = Runtime, Input = RuntimeInput>
{
}

#[async_trait]
pub trait ApiService: Send + Sync {
    async fn add(
        &self,
        application_id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition>;

    async fn update(&self, id: &Id, input: ApiDefinitionInput) -> ResolverResult<ApiDefinition>;

    async fn delete(&self, id: &Id) -> ResolverResult<ApiDefinition>;

    /// Retrieves the spec document from its declared source, stores it and
    /// returns it. Resolves only once retrieval completed or failed; a
    /// failed fetch surfaces as an upstream error and must not fall back to
    /// the stored spec.
    async fn refetch_spec(&self, id: &Id) -> ResolverResult<ApiSpec>;

    /// Binds an auth configuration to the (api, runtime) pair. Fails
    /// not-found when either side is missing and with an entitlement error
    /// when the runtime may not consume the API.
    async fn set_auth(
        &self,
        api_id: &Id,
        runtime_id: &Id,
        input: AuthInput,
    ) -> ResolverResult<RuntimeAuth>;

    async fn delete_auth(&self, api_id: &Id, runtime_id: &Id) -> ResolverResult<RuntimeAuth>;

    async fn list_for_application(
        &self,
        application_id: &Id,
        group: Option<String>,
        page: PageQuery,
    ) -> ResolverResult<Page<ApiDefinition>>;
}

#[async_trait]
pub trait EventApiService: Send + Sync {
    async fn add(
        &self,
        application_id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition>;

    async fn update(
        &self,
        id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition>;

    async fn delete(&self, id: &Id) -> ResolverResult<EventApiDefinition>;

    async fn refetch_spec(&self, id: &Id) -> ResolverResult<EventApiSpec>;

    async fn list_for_application(
        &self,
        application_id: &Id,
        group: Option<String>,
        page: PageQuery,
    ) -> ResolverResult<Page<EventApiDefinition>>;
}

#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn add(&self, application_id: &Id, input: DocumentInput) -> ResolverResult<Document>;

    async fn delete(&self, id: &Id) -> ResolverResult<Document>;

    async fn list_for_application(
        &self,
        application_id: &Id,
        page: PageQuery,
    ) -> ResolverResult<Page<Document>>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    /// Lists recorded health checks filtered by type membership and, when
    /// given, origin equality.
    async fn list(
        &self,
        types: Vec<HealthCheckType>,
        origin: Option<Id>,
        page: PageQuery,
    ) -> ResolverResult<Page<HealthCheck>>;
}
