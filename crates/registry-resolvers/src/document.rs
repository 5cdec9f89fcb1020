use std::sync::Arc;

use registry_types::{Document, DocumentInput, Id};

use crate::error::ResolverResult;
use crate::services::DocumentService;
use crate::validate::require_non_empty;

/// Resolver for documents: add and delete only; documents are otherwise
/// read through their application's nested field.
pub struct DocumentResolver {
    service: Arc<dyn DocumentService>,
}

impl DocumentResolver {
    pub fn new(service: Arc<dyn DocumentService>) -> Self {
        DocumentResolver { service }
    }

    pub async fn add(
        &self,
        application_id: &Id,
        input: DocumentInput,
    ) -> ResolverResult<Document> {
        require_non_empty("document", "title", &input.title)?;
        self.service.add(application_id, input).await
    }

    pub async fn delete(&self, id: &Id) -> ResolverResult<Document> {
        self.service.delete(id).await
    }
}
