//! Offset cursors. Opaque to callers; only this connector mints and reads
//! them.

use base64::{engine::general_purpose, Engine};
use registry_resolvers::{ResolverError, ResolverResult};
use registry_types::PageCursor;

const PREFIX: &str = "offset:";

pub(crate) fn encode(offset: usize) -> PageCursor {
    PageCursor::new(general_purpose::STANDARD.encode(format!("{PREFIX}{offset}")))
}

pub(crate) fn decode(cursor: &PageCursor) -> ResolverResult<usize> {
    let invalid = || ResolverError::InvalidCursor {
        cursor: cursor.as_str().to_string(),
    };
    let bytes = general_purpose::STANDARD
        .decode(cursor.as_str())
        .map_err(|_| invalid())?;
    let text = String::from_utf8(bytes).map_err(|_| invalid())?;
    let offset = text.strip_prefix(PREFIX).ok_or_else(invalid)?;
    offset.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_offsets() {
        for offset in [0, 1, 42, 10_000] {
            assert_eq!(decode(&encode(offset)), Ok(offset));
        }
    }

    #[test]
    fn rejects_foreign_tokens() {
        for garbage in ["", "not base64!!", "b2Zmc2V0", "cmFuZG9tOjQ="] {
            let cursor = PageCursor::new(garbage);
            assert!(matches!(
                decode(&cursor),
                Err(ResolverError::InvalidCursor { .. })
            ));
        }
    }
}
