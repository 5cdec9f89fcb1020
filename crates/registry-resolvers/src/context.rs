use std::sync::Arc;

use crate::api::ApiResolver;
use crate::application::ApplicationResolver;
use crate::document::DocumentResolver;
use crate::event_api::EventApiResolver;
use crate::health_check::HealthCheckResolver;
use crate::runtime::RuntimeResolver;
use crate::services::{
    ApiService, ApplicationService, DocumentService, EventApiService, HealthCheckService,
    RuntimeService,
};

/// The shared dispatch context: every per-entity resolver, built once from
/// independently constructed services and immutable afterwards. No entity
/// resolver depends on another entity's resolver; only this aggregate holds
/// them all. The capability groups receive it explicitly at construction.
pub struct ResolverContext {
    pub applications: ApplicationResolver,
    pub runtimes: RuntimeResolver,
    pub apis: ApiResolver,
    pub event_apis: EventApiResolver,
    pub documents: DocumentResolver,
    pub health_checks: HealthCheckResolver,
}

impl ResolverContext {
    pub fn new(
        applications: Arc<dyn ApplicationService>,
        runtimes: Arc<dyn RuntimeService>,
        apis: Arc<dyn ApiService>,
        event_apis: Arc<dyn EventApiService>,
        documents: Arc<dyn DocumentService>,
        health_checks: Arc<dyn HealthCheckService>,
    ) -> Self {
        ResolverContext {
            applications: ApplicationResolver::new(
                applications,
                apis.clone(),
                event_apis.clone(),
                documents.clone(),
            ),
            runtimes: RuntimeResolver::new(runtimes),
            apis: ApiResolver::new(apis),
            event_apis: EventApiResolver::new(event_apis),
            documents: DocumentResolver::new(documents),
            health_checks: HealthCheckResolver::new(health_checks),
        }
    }
}
