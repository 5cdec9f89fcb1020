//! The uniform resolver over any paginated, labeled, annotated entity.

use std::collections::BTreeSet;
use std::sync::Arc;

use registry_types::{Id, LabelFilter, Page, PageCursor};
use tracing::debug;

use crate::error::ResolverResult;
use crate::page_query::PageQuery;
use crate::services::LabeledEntityService;
use crate::validate::{require_non_empty, ValidInput};

/// Resolves the shared list / lookup / lifecycle / label / annotation
/// contract against one entity service. Application and runtime resolvers
/// are both thin wrappers around this; the contract exists once.
pub struct LabeledEntityResolver<S: ?Sized> {
    kind: &'static str,
    service: Arc<S>,
}

impl<S> LabeledEntityResolver<S>
where
    S: LabeledEntityService + ?Sized,
{
    pub fn new(kind: &'static str, service: Arc<S>) -> Self {
        LabeledEntityResolver { kind, service }
    }

    pub async fn list(
        &self,
        filter: Vec<LabelFilter>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<S::Entity>> {
        let page = PageQuery::new(first, after)?;
        debug!(kind = self.kind, filters = filter.len(), "listing entities");
        self.service.list(filter, page).await
    }

    pub async fn by_id(&self, id: &Id) -> ResolverResult<S::Entity> {
        debug!(kind = self.kind, %id, "resolving entity by id");
        self.service.get(id).await
    }

    pub async fn create(&self, input: S::Input) -> ResolverResult<S::Entity> {
        input.validate()?;
        debug!(kind = self.kind, "creating entity");
        self.service.create(input).await
    }

    pub async fn update(&self, id: &Id, input: S::Input) -> ResolverResult<S::Entity> {
        input.validate()?;
        debug!(kind = self.kind, %id, "updating entity");
        self.service.update(id, input).await
    }

    pub async fn delete(&self, id: &Id) -> ResolverResult<S::Entity> {
        debug!(kind = self.kind, %id, "deleting entity");
        self.service.delete(id).await
    }

    pub async fn add_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        require_non_empty("label", "key", key)?;
        self.service.add_label(id, key, values).await
    }

    pub async fn delete_label(
        &self,
        id: &Id,
        key: &str,
        values: Vec<String>,
    ) -> ResolverResult<BTreeSet<String>> {
        require_non_empty("label", "key", key)?;
        self.service.delete_label(id, key, values).await
    }

    pub async fn set_annotation(
        &self,
        id: &Id,
        key: &str,
        value: String,
    ) -> ResolverResult<String> {
        require_non_empty("annotation", "key", key)?;
        self.service.set_annotation(id, key, value).await
    }

    pub async fn delete_annotation(&self, id: &Id, key: &str) -> ResolverResult<Option<String>> {
        require_non_empty("annotation", "key", key)?;
        self.service.delete_annotation(id, key).await
    }
}
