use registry_resolvers::{PageQuery, ResolverResult};
use registry_types::{Page, PageInfo};

use crate::cursor;

/// Slices an already-ordered, already-filtered result set. A cursor we
/// issued earlier resumes exactly where the previous slice ended, so
/// consecutive pages are disjoint and gap-free. A cursor pointing past the
/// end (records deleted since issuance) yields an empty page, not an error.
pub(crate) fn paginate<T: Clone>(items: &[T], page: &PageQuery) -> ResolverResult<Page<T>> {
    let total = items.len() as u64;
    let offset = match &page.after {
        Some(cursor) => cursor::decode(cursor)?,
        None => 0,
    };
    let offset = offset.min(items.len());
    let end = match page.first {
        Some(first) => offset.saturating_add(first as usize).min(items.len()),
        None => items.len(),
    };

    let data = items[offset..end].to_vec();
    let end_cursor = (!data.is_empty()).then(|| cursor::encode(end));
    Ok(Page {
        data,
        page_info: PageInfo {
            has_next_page: end < items.len(),
            end_cursor,
        },
        total_count: Some(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<u32> {
        vec![10, 20, 30, 40, 50]
    }

    #[test]
    fn unbounded_query_returns_everything() {
        let page = paginate(&items(), &PageQuery::all()).expect("valid query");
        assert_eq!(page.data, items());
        assert!(!page.page_info.has_next_page);
        assert_eq!(page.total_count, Some(5));
    }

    #[test]
    fn walking_pages_is_disjoint_and_gap_free() {
        let mut seen = Vec::new();
        let mut after = None;
        loop {
            let query = PageQuery {
                first: Some(2),
                after,
            };
            let page = paginate(&items(), &query).expect("valid query");
            assert!(page.data.len() <= 2);
            seen.extend(page.data);
            if !page.page_info.has_next_page {
                break;
            }
            after = page.page_info.end_cursor;
        }
        assert_eq!(seen, items());
    }

    #[test]
    fn first_zero_is_an_empty_slice_with_remainder_flagged() {
        let query = PageQuery {
            first: Some(0),
            after: None,
        };
        let page = paginate(&items(), &query).expect("valid query");
        assert!(page.data.is_empty());
        assert!(page.page_info.has_next_page);
        assert_eq!(page.page_info.end_cursor, None);
    }

    #[test]
    fn cursor_past_the_end_yields_an_empty_page() {
        let query = PageQuery {
            first: None,
            after: Some(cursor::encode(99)),
        };
        let page = paginate(&items(), &query).expect("valid query");
        assert!(page.data.is_empty());
        assert!(!page.page_info.has_next_page);
    }
}
