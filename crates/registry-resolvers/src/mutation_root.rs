//! Top-level mutation dispatch. Every operation is a single delegate call;
//! the error of a failing field is surfaced unchanged for that field.

use std::collections::BTreeSet;
use std::sync::Arc;

use registry_types::{
    ApiDefinition, ApiDefinitionInput, ApiSpec, Application, ApplicationInput, AuthInput,
    Document, DocumentInput, EventApiDefinition, EventApiDefinitionInput, EventApiSpec, Id,
    Runtime, RuntimeAuth, RuntimeInput, Webhook, WebhookInput,
};

use crate::context::ResolverContext;
use crate::error::ResolverResult;

/// The full value set stored under a label key after a mutation.
pub type LabelValues = BTreeSet<String>;

pub struct MutationRoot {
    ctx: Arc<ResolverContext>,
}

impl MutationRoot {
    pub(crate) fn new(ctx: Arc<ResolverContext>) -> Self {
        MutationRoot { ctx }
    }

    // Applications

    pub async fn create_application(
        &self,
        input: ApplicationInput,
    ) -> ResolverResult<Application> {
        self.ctx.applications.entity.create(input).await
    }

    pub async fn update_application(
        &self,
        id: &Id,
        input: ApplicationInput,
    ) -> ResolverResult<Application> {
        self.ctx.applications.entity.update(id, input).await
    }

    pub async fn delete_application(&self, id: &Id) -> ResolverResult<Application> {
        self.ctx.applications.entity.delete(id).await
    }

    pub async fn add_application_label(
        &self,
        application_id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<LabelValues> {
        self.ctx
            .applications
            .entity
            .add_label(application_id, key, values)
            .await
    }

    pub async fn delete_application_label(
        &self,
        application_id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<LabelValues> {
        self.ctx
            .applications
            .entity
            .delete_label(application_id, key, values)
            .await
    }

    pub async fn add_application_annotation(
        &self,
        application_id: &Id,
        key: &str,
        value: String,
    ) -> ResolverResult<String> {
        self.ctx
            .applications
            .entity
            .set_annotation(application_id, key, value)
            .await
    }

    pub async fn delete_application_annotation(
        &self,
        application_id: &Id,
        key: &str,
    ) -> ResolverResult<Option<String>> {
        self.ctx
            .applications
            .entity
            .delete_annotation(application_id, key)
            .await
    }

    pub async fn add_application_webhook(
        &self,
        application_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        self.ctx.applications.add_webhook(application_id, input).await
    }

    pub async fn update_application_webhook(
        &self,
        webhook_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        self.ctx.applications.update_webhook(webhook_id, input).await
    }

    pub async fn delete_application_webhook(&self, webhook_id: &Id) -> ResolverResult<Webhook> {
        self.ctx.applications.delete_webhook(webhook_id).await
    }

    // APIs

    pub async fn add_api(
        &self,
        application_id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition> {
        self.ctx.apis.add(application_id, input).await
    }

    pub async fn update_api(
        &self,
        id: &Id,
        input: ApiDefinitionInput,
    ) -> ResolverResult<ApiDefinition> {
        self.ctx.apis.update(id, input).await
    }

    pub async fn delete_api(&self, id: &Id) -> ResolverResult<ApiDefinition> {
        self.ctx.apis.delete(id).await
    }

    pub async fn refetch_api_spec(&self, api_id: &Id) -> ResolverResult<ApiSpec> {
        self.ctx.apis.refetch_spec(api_id).await
    }

    pub async fn set_api_auth(
        &self,
        api_id: &Id,
        runtime_id: &Id,
        input: AuthInput,
    ) -> ResolverResult<RuntimeAuth> {
        self.ctx.apis.set_auth(api_id, runtime_id, input).await
    }

    pub async fn delete_api_auth(
        &self,
        api_id: &Id,
        runtime_id: &Id,
    ) -> ResolverResult<RuntimeAuth> {
        self.ctx.apis.delete_auth(api_id, runtime_id).await
    }

    // Event APIs

    pub async fn add_event_api(
        &self,
        application_id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        self.ctx.event_apis.add(application_id, input).await
    }

    pub async fn update_event_api(
        &self,
        id: &Id,
        input: EventApiDefinitionInput,
    ) -> ResolverResult<EventApiDefinition> {
        self.ctx.event_apis.update(id, input).await
    }

    pub async fn delete_event_api(&self, id: &Id) -> ResolverResult<EventApiDefinition> {
        self.ctx.event_apis.delete(id).await
    }

    pub async fn refetch_event_api_spec(&self, event_api_id: &Id) -> ResolverResult<EventApiSpec> {
        self.ctx.event_apis.refetch_spec(event_api_id).await
    }

    // Documents

    pub async fn add_document(
        &self,
        application_id: &Id,
        input: DocumentInput,
    ) -> ResolverResult<Document> {
        self.ctx.documents.add(application_id, input).await
    }

    pub async fn delete_document(&self, id: &Id) -> ResolverResult<Document> {
        self.ctx.documents.delete(id).await
    }

    // Runtimes

    pub async fn create_runtime(&self, input: RuntimeInput) -> ResolverResult<Runtime> {
        self.ctx.runtimes.entity.create(input).await
    }

    pub async fn update_runtime(&self, id: &Id, input: RuntimeInput) -> ResolverResult<Runtime> {
        self.ctx.runtimes.entity.update(id, input).await
    }

    pub async fn delete_runtime(&self, id: &Id) -> ResolverResult<Runtime> {
        self.ctx.runtimes.entity.delete(id).await
    }

    pub async fn add_runtime_label(
        &self,
        runtime_id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<LabelValues> {
        self.ctx.runtimes.entity.add_label(runtime_id, key, values).await
    }

    pub async fn delete_runtime_label(
        &self,
        runtime_id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<LabelValues> {
        self.ctx
            .runtimes
            .entity
            .delete_label(runtime_id, key, values)
            .await
    }

    pub async fn add_runtime_annotation(
        &self,
        runtime_id: &Id,
        key: &str,
        value: String,
    ) -> ResolverResult<String> {
        self.ctx
            .runtimes
            .entity
            .set_annotation(runtime_id, key, value)
            .await
    }

    pub async fn delete_runtime_annotation(
        &self,
        runtime_id: &Id,
        key: &str,
    ) -> ResolverResult<Option<String>> {
        self.ctx.runtimes.entity.delete_annotation(runtime_id, key).await
    }
}
