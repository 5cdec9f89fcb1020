use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{DocumentService, PageQuery, ResolverError, ResolverResult};
use registry_types::{Document, DocumentInput, Id, Page};
use tokio::sync::RwLock;

use crate::paginate::paginate;
use crate::state::ConnectorState;

/// Document store.
#[derive(Clone)]
pub struct DocumentConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl DocumentConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        DocumentConnector { state }
    }
}

#[async_trait]
impl DocumentService for DocumentConnector {
    async fn add(&self, application_id: &Id, input: DocumentInput) -> ResolverResult<Document> {
        let mut state = self.state.write().await;
        if !state.applications.contains_key(application_id) {
            return Err(ResolverError::not_found("application", application_id));
        }
        let id = state.next_id("document");
        let document = Document {
            id: id.clone(),
            application_id: application_id.clone(),
            title: input.title,
            format: input.format,
            data: input.data,
        };
        state.documents.insert(id, document.clone());
        Ok(document)
    }

    async fn delete(&self, id: &Id) -> ResolverResult<Document> {
        let mut state = self.state.write().await;
        state
            .documents
            .remove(id)
            .ok_or_else(|| ResolverError::not_found("document", id))
    }

    async fn list_for_application(
        &self,
        application_id: &Id,
        page: PageQuery,
    ) -> ResolverResult<Page<Document>> {
        let state = self.state.read().await;
        let matching: Vec<Document> = state
            .documents
            .values()
            .filter(|document| document.application_id == *application_id)
            .cloned()
            .collect();
        paginate(&matching, &page)
    }
}
