//! Nested-field dispatch for an already-resolved application. Children are
//! listed from the parent's identity plus filter and pagination arguments;
//! the parent is never re-fetched. Batching across siblings, if wanted,
//! belongs to the hosting execution engine.

use std::sync::Arc;

use registry_types::{
    ApiDefinition, Application, Document, EventApiDefinition, Page, PageCursor,
};

use crate::context::ResolverContext;
use crate::error::ResolverResult;

pub struct ApplicationFields {
    ctx: Arc<ResolverContext>,
}

impl ApplicationFields {
    pub(crate) fn new(ctx: Arc<ResolverContext>) -> Self {
        ApplicationFields { ctx }
    }

    pub async fn apis(
        &self,
        parent: &Application,
        group: Option<String>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<ApiDefinition>> {
        self.ctx.applications.apis(parent, group, first, after).await
    }

    pub async fn event_apis(
        &self,
        parent: &Application,
        group: Option<String>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<EventApiDefinition>> {
        self.ctx
            .applications
            .event_apis(parent, group, first, after)
            .await
    }

    pub async fn documents(
        &self,
        parent: &Application,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<Document>> {
        self.ctx.applications.documents(parent, first, after).await
    }
}
