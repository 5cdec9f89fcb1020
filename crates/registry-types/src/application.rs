use serde::{Deserialize, Serialize};

use crate::{Annotations, Id, Labels};

/// An application registered in the catalog. Carries labels and annotations;
/// its APIs, event APIs and documents live with their own services and are
/// resolved as nested fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub labels: Labels,
    pub annotations: Annotations,
    pub health_check_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub name: String,
    pub description: Option<String>,
    pub labels: Option<Labels>,
    pub annotations: Option<Annotations>,
    pub health_check_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookKind {
    ConfigurationChanged,
}

/// A webhook registered under an application. Has its own identity: once
/// created it is updated and deleted by webhook ID, not application ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Id,
    pub application_id: Id,
    pub kind: WebhookKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInput {
    pub kind: WebhookKind,
    pub url: String,
}
