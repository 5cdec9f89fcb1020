use std::sync::Arc;

use registry_types::{HealthCheck, HealthCheckType, Id, Page, PageCursor};

use crate::error::ResolverResult;
use crate::page_query::PageQuery;
use crate::services::HealthCheckService;

/// Resolver for recorded health checks.
pub struct HealthCheckResolver {
    service: Arc<dyn HealthCheckService>,
}

impl HealthCheckResolver {
    pub fn new(service: Arc<dyn HealthCheckService>) -> Self {
        HealthCheckResolver { service }
    }

    pub async fn list(
        &self,
        types: Vec<HealthCheckType>,
        origin: Option<Id>,
        first: Option<i32>,
        after: Option<PageCursor>,
    ) -> ResolverResult<Page<HealthCheck>> {
        let page = PageQuery::new(first, after)?;
        self.service.list(types, origin, page).await
    }
}
