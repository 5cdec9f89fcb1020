use std::sync::Arc;

use registry_types::{
    ApiDefinition, Application, Document, EventApiDefinition, Id, Page, PageCursor, Webhook,
    WebhookInput,
};

use crate::error::ResolverResult;
use crate::labeled::LabeledEntityResolver;
use crate::page_query::PageQuery;
use crate::services::{ApiService, ApplicationService, DocumentService, EventApiService};
use crate::validate::require_non_empty;

/// Resolver for applications: the labeled-entity contract, webhook
/// mutations, and the nested child collections.
pub struct ApplicationResolver {
    pub entity: LabeledEntityResolver<dyn ApplicationService>,
    service: Arc<dyn ApplicationService>,
    apis: Arc<dyn ApiService>,
    event_apis: Arc<dyn EventApiService>,
    documents: Arc<dyn DocumentService>,
}

impl ApplicationResolver {
    pub fn new(
        service: Arc<dyn ApplicationService>,
        apis: Arc<dyn ApiService>,
        event_apis: Arc<dyn EventApiService>,
        documents: Arc<dyn DocumentService>,
    ) -> Self {
        ApplicationResolver {
            entity: LabeledEntityResolver::new("application", service.clone()),
            service,
            apis,
            event_apis,
            documents,
        }
    }

    pub async fn add_webhook(
        &self,
        application_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        require_non_empty("webhook", "url", &input.url)?;
        self.service.add_webhook(application_id, input).await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        require_non_empty("webhook", "url", &input.url)?;
        self.service.update_webhook(webhook_id, input).await
    }

    pub async fn delete_webhook(&self, webhook_id: &Id) -> ResolverResult<Webhook> {
        self.service.delete_webhook(webhook_id).await
    }

    // Nested fields resolve from the parent's identity alone; the parent
    // snapshot is never re-fetched.

    pub async fn apis(
        &self,
        parent: &Application,
        group: Option<String>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<ApiDefinition>> {
        let page = PageQuery::new(first, after)?;
        self.apis.list_for_application(&parent.id, group, page).await
    }

    pub async fn event_apis(
        &self,
        parent: &Application,
        group: Option<String>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<EventApiDefinition>> {
        let page = PageQuery::new(first, after)?;
        self.event_apis
            .list_for_application(&parent.id, group, page)
            .await
    }

    pub async fn documents(
        &self,
        parent: &Application,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<Document>> {
        let page = PageQuery::new(first, after)?;
        self.documents.list_for_application(&parent.id, page).await
    }
}
