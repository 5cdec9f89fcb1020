use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{
    ApplicationService, LabeledEntityService, PageQuery, ResolverError, ResolverResult,
};
use registry_types::{
    Application, ApplicationInput, Id, LabelFilter, Page, Webhook, WebhookInput,
};
use tokio::sync::RwLock;

use crate::labeled;
use crate::state::ConnectorState;

/// Application store, including the webhook sub-resources.
#[derive(Clone)]
pub struct ApplicationConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl ApplicationConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        ApplicationConnector { state }
    }
}

#[async_trait]
impl LabeledEntityService for ApplicationConnector {
    type Entity = Application;
    type Input = ApplicationInput;

    async fn list(
        &self,
        filter: Vec<LabelFilter>,
        page: PageQuery,
    ) -> ResolverResult<Page<Application>> {
        let state = self.state.read().await;
        labeled::list(&state.applications, &filter, &page)
    }

    async fn get(&self, id: &Id) -> ResolverResult<Application> {
        let state = self.state.read().await;
        labeled::get(&state.applications, id)
    }

    async fn create(&self, input: ApplicationInput) -> ResolverResult<Application> {
        let mut state = self.state.write().await;
        let id = state.next_id("application");
        let application = Application {
            id: id.clone(),
            name: input.name,
            description: input.description,
            labels: input.labels.unwrap_or_default(),
            annotations: input.annotations.unwrap_or_default(),
            health_check_url: input.health_check_url,
        };
        state.applications.insert(id, application.clone());
        Ok(application)
    }

    async fn update(&self, id: &Id, input: ApplicationInput) -> ResolverResult<Application> {
        let mut state = self.state.write().await;
        let application = state
            .applications
            .get_mut(id)
            .ok_or_else(|| ResolverError::not_found("application", id))?;
        application.name = input.name;
        application.description = input.description;
        application.health_check_url = input.health_check_url;
        // Label/annotation maps are replaced only when the input carries
        // them; the dedicated mutations stay the way to edit them in place.
        if let Some(labels) = input.labels {
            application.labels = labels;
        }
        if let Some(annotations) = input.annotations {
            application.annotations = annotations;
        }
        Ok(application.clone())
    }

    async fn delete(&self, id: &Id) -> ResolverResult<Application> {
        let mut state = self.state.write().await;
        let snapshot = labeled::delete(&mut state.applications, id)?;
        state
            .webhooks
            .retain(|_, webhook| webhook.application_id != *id);
        Ok(snapshot)
    }

    async fn add_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        let mut state = self.state.write().await;
        labeled::add_label(&mut state.applications, id, key, values)
    }

    async fn delete_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        let mut state = self.state.write().await;
        labeled::delete_label(&mut state.applications, id, key, values)
    }

    async fn set_annotation(&self, id: &Id, key: &str, value: String) -> ResolverResult<String> {
        let mut state = self.state.write().await;
        labeled::set_annotation(&mut state.applications, id, key, value)
    }

    async fn delete_annotation(&self, id: &Id, key: &str) -> ResolverResult<Option<String>> {
        let mut state = self.state.write().await;
        labeled::delete_annotation(&mut state.applications, id, key)
    }
}

#[async_trait]
impl ApplicationService for ApplicationConnector {
    async fn add_webhook(
        &self,
        application_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        let mut state = self.state.write().await;
        if !state.applications.contains_key(application_id) {
            return Err(ResolverError::not_found("application", application_id));
        }
        let id = state.next_id("webhook");
        let webhook = Webhook {
            id: id.clone(),
            application_id: application_id.clone(),
            kind: input.kind,
            url: input.url,
        };
        state.webhooks.insert(id, webhook.clone());
        Ok(webhook)
    }

    async fn update_webhook(
        &self,
        webhook_id: &Id,
        input: WebhookInput,
    ) -> ResolverResult<Webhook> {
        let mut state = self.state.write().await;
        let webhook = state
            .webhooks
            .get_mut(webhook_id)
            .ok_or_else(|| ResolverError::not_found("webhook", webhook_id))?;
        webhook.kind = input.kind;
        webhook.url = input.url;
        Ok(webhook.clone())
    }

    async fn delete_webhook(&self, webhook_id: &Id) -> ResolverResult<Webhook> {
        let mut state = self.state.write().await;
        state
            .webhooks
            .remove(webhook_id)
            .ok_or_else(|| ResolverError::not_found("webhook", webhook_id))
    }
}
