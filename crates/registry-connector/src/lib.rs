//! In-memory reference connector for the application registry.
//!
//! Implements every service contract the resolver core delegates to, over
//! shared `BTreeMap` state behind one `RwLock`. It exists to exercise the
//! resolver contract in tests, not to be a production store: IDs come from
//! a counter, cursors are base64 offsets, and the spec "upstream" is a
//! switchable source.

mod api;
mod application;
mod cursor;
mod document;
mod event_api;
mod health_check;
mod labeled;
mod paginate;
mod runtime;
mod state;

use std::sync::Arc;

use registry_resolvers::ResolverContext;
use registry_types::{HealthCheck, Id};
use tokio::sync::RwLock;

pub use api::ApiConnector;
pub use application::ApplicationConnector;
pub use document::DocumentConnector;
pub use event_api::EventApiConnector;
pub use health_check::HealthCheckConnector;
pub use runtime::RuntimeConnector;

use state::ConnectorState;

/// Hub handing out per-entity connectors over one shared state, plus the
/// knobs tests use to stage upstream failures, entitlements and recorded
/// health checks.
#[derive(Clone, Default)]
pub struct MemoryConnector {
    state: Arc<RwLock<ConnectorState>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        MemoryConnector::default()
    }

    pub fn applications(&self) -> ApplicationConnector {
        ApplicationConnector::new(self.state.clone())
    }

    pub fn runtimes(&self) -> RuntimeConnector {
        RuntimeConnector::new(self.state.clone())
    }

    pub fn apis(&self) -> ApiConnector {
        ApiConnector::new(self.state.clone())
    }

    pub fn event_apis(&self) -> EventApiConnector {
        EventApiConnector::new(self.state.clone())
    }

    pub fn documents(&self) -> DocumentConnector {
        DocumentConnector::new(self.state.clone())
    }

    pub fn health_checks(&self) -> HealthCheckConnector {
        HealthCheckConnector::new(self.state.clone())
    }

    /// Wires every connector into a ready resolver context.
    pub fn resolver_context(&self) -> ResolverContext {
        ResolverContext::new(
            Arc::new(self.applications()),
            Arc::new(self.runtimes()),
            Arc::new(self.apis()),
            Arc::new(self.event_apis()),
            Arc::new(self.documents()),
            Arc::new(self.health_checks()),
        )
    }

    /// Allows `runtime_id` to bind auth on `api_id`.
    pub async fn grant_entitlement(&self, api_id: &Id, runtime_id: &Id) {
        let mut state = self.state.write().await;
        state
            .entitlements
            .insert((api_id.clone(), runtime_id.clone()));
    }

    /// Marks the declared spec source of an API or event API up or down.
    pub async fn set_spec_source_reachable(&self, id: &Id, reachable: bool) {
        let mut state = self.state.write().await;
        if let Some(source) = state.spec_sources.get_mut(id) {
            source.reachable = reachable;
        }
    }

    /// Replaces the document the declared spec source would serve next.
    pub async fn set_spec_source_document(&self, id: &Id, document: impl Into<String>) {
        let mut state = self.state.write().await;
        if let Some(source) = state.spec_sources.get_mut(id) {
            source.document = Some(document.into());
        }
    }

    pub async fn record_health_check(&self, check: HealthCheck) {
        let mut state = self.state.write().await;
        state.health_checks.push(check);
    }
}
