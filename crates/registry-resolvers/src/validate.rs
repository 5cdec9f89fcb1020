//! Argument-shape validation. This is the only decision the resolver layer
//! makes on its own; everything past it is delegated.

use registry_types::{ApplicationInput, RuntimeInput};

use crate::error::{ResolverError, ResolverResult};

pub fn require_non_empty(
    object: &'static str,
    field: &'static str,
    value: &str,
) -> ResolverResult<()> {
    if value.trim().is_empty() {
        return Err(ResolverError::EmptyField { object, field });
    }
    Ok(())
}

/// Implemented by mutation inputs that can be checked before dispatch.
pub trait ValidInput {
    fn validate(&self) -> ResolverResult<()>;
}

impl ValidInput for ApplicationInput {
    fn validate(&self) -> ResolverResult<()> {
        require_non_empty("application", "name", &self.name)
    }
}

impl ValidInput for RuntimeInput {
    fn validate(&self) -> ResolverResult<()> {
        require_non_empty("runtime", "name", &self.name)
    }
}
