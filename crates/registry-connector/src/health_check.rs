use std::sync::Arc;

use async_trait::async_trait;
use registry_resolvers::{HealthCheckService, PageQuery, ResolverResult};
use registry_types::{HealthCheck, HealthCheckType, Id, Page};
use tokio::sync::RwLock;

use crate::paginate::paginate;
use crate::state::ConnectorState;

/// Recorded health-check outcomes, in recording order.
#[derive(Clone)]
pub struct HealthCheckConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl HealthCheckConnector {
    pub(crate) fn new(state: Arc<RwLock<ConnectorState>>) -> Self {
        HealthCheckConnector { state }
    }
}

#[async_trait]
impl HealthCheckService for HealthCheckConnector {
    async fn list(
        &self,
        types: Vec<HealthCheckType>,
        origin: Option<Id>,
        page: PageQuery,
    ) -> ResolverResult<Page<HealthCheck>> {
        let state = self.state.read().await;
        let matching: Vec<HealthCheck> = state
            .health_checks
            .iter()
            // An empty type set means no type filter.
            .filter(|check| types.is_empty() || types.contains(&check.kind))
            .filter(|check| {
                origin
                    .as_ref()
                    .is_none_or(|wanted| check.origin.as_ref() == Some(wanted))
            })
            .cloned()
            .collect();
        paginate(&matching, &page)
    }
}
