use serde::{Deserialize, Serialize};

use crate::{ApiSpecInput, Id, SpecFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventApiSpec {
    pub data: Option<String>,
    pub format: SpecFormat,
}

/// An event-driven API exposed by an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventApiDefinition {
    pub id: Id,
    pub application_id: Id,
    pub name: String,
    pub group: Option<String>,
    pub spec: Option<EventApiSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventApiDefinitionInput {
    pub name: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
}
