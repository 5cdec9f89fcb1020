//! Resolver aggregation core for the application registry.
//!
//! Composes independently built per-entity services into one dispatch
//! surface with a uniform pagination, filtering, label/annotation and
//! error-propagation contract. The hosting execution engine (transport,
//! selection-set parallelism, partial-response assembly) and the services
//! themselves are external collaborators.

mod api;
mod application;
mod application_fields;
mod context;
mod document;
mod error;
mod event_api;
mod health_check;
mod labeled;
mod mutation_root;
mod page_query;
mod query_root;
mod root;
mod runtime;
mod services;
mod validate;

pub use api::ApiResolver;
pub use application::ApplicationResolver;
pub use application_fields::ApplicationFields;
pub use context::ResolverContext;
pub use document::DocumentResolver;
pub use error::{ResolverError, ResolverResult};
pub use event_api::EventApiResolver;
pub use health_check::HealthCheckResolver;
pub use labeled::LabeledEntityResolver;
pub use mutation_root::{LabelValues, MutationRoot};
pub use page_query::PageQuery;
pub use query_root::QueryRoot;
pub use root::RootResolver;
pub use runtime::RuntimeResolver;
pub use services::{
    ApiService, ApplicationService, DocumentService, EventApiService, HealthCheckService,
    LabeledEntityService, RuntimeService,
};
pub use validate::ValidInput;
