use serde::{Deserialize, Serialize};

use crate::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthCheckType {
    ManagementPlaneApplicationHealthcheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCheckStatusCondition {
    Succeeded,
    Failed,
}

/// A recorded health-check outcome, optionally tied to the entity it
/// originated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub kind: HealthCheckType,
    pub condition: HealthCheckStatusCondition,
    pub origin: Option<Id>,
    pub message: Option<String>,
}
