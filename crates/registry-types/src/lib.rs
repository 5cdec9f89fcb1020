//! Shared data model for the application registry.
//!
//! Pure data: entity snapshots, mutation inputs, label/annotation maps and
//! the pagination envelope. No behavior beyond the set semantics that the
//! label and annotation maps themselves guarantee.

mod api;
mod application;
mod document;
mod event_api;
mod health_check;
mod id;
mod labels;
mod page;
mod runtime;

pub use api::{
    ApiDefinition, ApiDefinitionInput, ApiSpec, ApiSpecInput, Auth, AuthInput, Credential,
    RuntimeAuth, SpecFormat,
};
pub use application::{
    Application, ApplicationInput, Webhook, WebhookInput, WebhookKind,
};
pub use document::{Document, DocumentFormat, DocumentInput};
pub use event_api::{EventApiDefinition, EventApiDefinitionInput, EventApiSpec};
pub use health_check::{HealthCheck, HealthCheckStatusCondition, HealthCheckType};
pub use id::Id;
pub use labels::{Annotations, LabelFilter, Labels};
pub use page::{Page, PageCursor, PageInfo};
pub use runtime::{Runtime, RuntimeInput};
