//! Shared implementation of the labeled-entity contract over a record map.

use std::collections::{BTreeMap, BTreeSet};

use registry_resolvers::{PageQuery, ResolverError, ResolverResult};
use registry_types::{Id, LabelFilter, Page};

use crate::paginate::paginate;
use crate::state::LabeledRecord;

pub(crate) fn list<E: LabeledRecord + Clone>(
    map: &BTreeMap<Id, E>,
    filter: &[LabelFilter],
    page: &PageQuery,
) -> ResolverResult<Page<E>> {
    let matching: Vec<E> = map
        .values()
        .filter(|record| record.labels().matches_all(filter))
        .cloned()
        .collect();
    paginate(&matching, page)
}

pub(crate) fn get<E: LabeledRecord + Clone>(
    map: &BTreeMap<Id, E>,
    id: &Id,
) -> ResolverResult<E> {
    map.get(id)
        .cloned()
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))
}

pub(crate) fn delete<E: LabeledRecord>(
    map: &mut BTreeMap<Id, E>,
    id: &Id,
) -> ResolverResult<E> {
    map.remove(id)
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))
}

pub(crate) fn add_label<E: LabeledRecord>(
    map: &mut BTreeMap<Id, E>,
    id: &Id,
    key: &str,
    values: Vec<String>,
) -> ResolverResult<BTreeSet<String>> {
    let record = map
        .get_mut(id)
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))?;
    Ok(record.labels_mut().union(key, values))
}

pub(crate) fn delete_label<E: LabeledRecord>(
    map: &mut BTreeMap<Id, E>,
    id: &Id,
    key: &str,
    values: Vec<String>,
) -> ResolverResult<BTreeSet<String>> {
    let record = map
        .get_mut(id)
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))?;
    let values: BTreeSet<String> = values.into_iter().collect();
    Ok(record.labels_mut().subtract(key, &values))
}

pub(crate) fn set_annotation<E: LabeledRecord>(
    map: &mut BTreeMap<Id, E>,
    id: &Id,
    key: &str,
    value: String,
) -> ResolverResult<String> {
    let record = map
        .get_mut(id)
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))?;
    Ok(record.annotations_mut().set(key, value))
}

pub(crate) fn delete_annotation<E: LabeledRecord>(
    map: &mut BTreeMap<Id, E>,
    id: &Id,
    key: &str,
) -> ResolverResult<Option<String>> {
    let record = map
        .get_mut(id)
        .ok_or_else(|| ResolverError::not_found(E::KIND, id))?;
    Ok(record.annotations_mut().remove(key))
}
