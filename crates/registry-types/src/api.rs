use serde::{Deserialize, Serialize};

use crate::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecFormat {
    Yaml,
    Json,
}

/// The specification document of an API, as last retrieved from its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpec {
    pub data: Option<String>,
    pub format: SpecFormat,
}

/// An API exposed by an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefinition {
    pub id: Id,
    pub application_id: Id,
    pub name: String,
    pub target_url: String,
    /// Logical grouping used by the nested `apis` field filter.
    pub group: Option<String>,
    pub spec: Option<ApiSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpecInput {
    pub format: SpecFormat,
    pub data: Option<String>,
    /// URL the spec document is refetched from, when one is declared.
    pub fetch_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefinitionInput {
    pub name: String,
    pub target_url: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credential {
    Basic {
        username: String,
        password: String,
    },
    Oauth {
        client_id: String,
        client_secret: String,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub credential: Credential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInput {
    pub credential: Credential,
}

/// Authentication configuration bound to one (API, runtime) pair. Keyed by
/// that pair; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeAuth {
    pub runtime_id: Id,
    pub api_id: Id,
    pub auth: Auth,
}
