use registry_types::PageCursor;

use crate::error::{ResolverError, ResolverResult};

/// Validated pagination arguments, ready to hand to a service. `first` is
/// proven non-negative; the cursor stays opaque and is checked by the
/// service that issued it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub first: Option<u32>,
    pub after: Option<PageCursor>,
}

impl PageQuery {
    pub fn new(first: Option<i32>, after: Option<PageCursor>) -> ResolverResult<Self> {
        let first = match first {
            Some(n) => {
                Some(u32::try_from(n).map_err(|_| ResolverError::InvalidPageSize { first: n })?)
            }
            None => None,
        };
        Ok(PageQuery { first, after })
    }

    /// Unbounded query from the start of the result set.
    pub fn all() -> Self {
        PageQuery::default()
    }
}
