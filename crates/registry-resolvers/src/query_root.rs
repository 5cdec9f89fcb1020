//! Top-level query dispatch.

use std::sync::Arc;

use registry_types::{
    Application, HealthCheck, HealthCheckType, Id, LabelFilter, Page, PageCursor, Runtime,
};

use crate::context::ResolverContext;
use crate::error::ResolverResult;

pub struct QueryRoot {
    ctx: Arc<ResolverContext>,
}

impl QueryRoot {
    pub(crate) fn new(ctx: Arc<ResolverContext>) -> Self {
        QueryRoot { ctx }
    }

    pub async fn applications(
        &self,
        filter: Vec<LabelFilter>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<Application>> {
        self.ctx.applications.entity.list(filter, first, after).await
    }

    pub async fn application(&self, id: &Id) -> ResolverResult<Application> {
        self.ctx.applications.entity.by_id(id).await
    }

    pub async fn runtimes(
        &self,
        filter: Vec<LabelFilter>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<Runtime>> {
        self.ctx.runtimes.entity.list(filter, first, after).await
    }

    pub async fn runtime(&self, id: &Id) -> ResolverResult<Runtime> {
        self.ctx.runtimes.entity.by_id(id).await
    }

    pub async fn health_checks(
        &self,
        types: Vec<HealthCheckType>,
        origin: Option<Id>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<HealthCheck>> {
        self.ctx.health_checks.list(types, origin, first, after).await
    }
}
