use serde::{Deserialize, Serialize};

use crate::{Annotations, Id, Labels};

/// A runtime that can consume registered APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runtime {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub labels: Labels,
    pub annotations: Annotations,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInput {
    pub name: String,
    pub description: Option<String>,
    pub labels: Option<Labels>,
    pub annotations: Option<Annotations>,
}
