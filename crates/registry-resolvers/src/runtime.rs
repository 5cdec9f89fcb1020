use std::sync::Arc;

use crate::labeled::LabeledEntityResolver;
use crate::services::RuntimeService;

/// Resolver for runtimes. The whole contract is the labeled-entity one.
pub struct RuntimeResolver {
    pub entity: LabeledEntityResolver<dyn RuntimeService>,
}

impl RuntimeResolver {
    pub fn new(service: Arc<dyn RuntimeService>) -> Self {
        RuntimeResolver {
            entity: LabeledEntityResolver::new("runtime", service),
        }
    }
}
