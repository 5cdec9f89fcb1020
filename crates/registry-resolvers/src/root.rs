use std::sync::Arc;

use crate::application_fields::ApplicationFields;
use crate::context::ResolverContext;
use crate::mutation_root::MutationRoot;
use crate::query_root::QueryRoot;

/// The composed dispatch surface. Built once at process start; afterwards
/// shared, read-only and safe for concurrent use across requests. Each
/// capability group is a cheap adapter over the same context.
#[derive(Clone)]
pub struct RootResolver {
    ctx: Arc<ResolverContext>,
}

impl RootResolver {
    pub fn new(ctx: ResolverContext) -> Self {
        RootResolver { ctx: Arc::new(ctx) }
    }

    pub fn query(&self) -> QueryRoot {
        QueryRoot::new(self.ctx.clone())
    }

    pub fn mutation(&self) -> MutationRoot {
        MutationRoot::new(self.ctx.clone())
    }

    pub fn application(&self) -> ApplicationFields {
        ApplicationFields::new(self.ctx.clone())
    }
}
