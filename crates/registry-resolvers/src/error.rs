use registry_types::Id;

/// Errors surfaced by resolver dispatch. Errors raised by a delegated
/// service are returned to the caller unchanged; the only errors produced
/// locally are the argument-shape validation variants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    #[error("invalid page size {first}: must be non-negative")]
    InvalidPageSize { first: i32 },

    #[error("invalid pagination cursor {cursor:?}: not issued by this service")]
    InvalidCursor { cursor: String },

    #[error("{object} requires a non-empty {field}")]
    EmptyField {
        object: &'static str,
        field: &'static str,
    },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("runtime {runtime_id} is not entitled to api {api_id}")]
    NotEntitled { api_id: Id, runtime_id: Id },

    #[error("upstream fetch failed: {message}")]
    Upstream { message: String },
}

impl ResolverError {
    pub fn not_found(kind: &'static str, id: &Id) -> Self {
        ResolverError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type ResolverResult<T> = Result<T, ResolverError>;
