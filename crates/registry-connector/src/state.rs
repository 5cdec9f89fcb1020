use std::collections::{BTreeMap, BTreeSet};

use registry_types::{
    Annotations, ApiDefinition, Application, Document, EventApiDefinition, HealthCheck, Id,
    Labels, Runtime, RuntimeAuth, SpecFormat, Webhook,
};

/// Where an API or event API spec document is refetched from. `reachable`
/// simulates the upstream being up or down.
#[derive(Debug, Clone)]
pub(crate) struct SpecSource {
    pub url: String,
    pub reachable: bool,
    pub document: Option<String>,
    pub format: SpecFormat,
}

/// All connector data. Maps are keyed by ID; IDs are minted zero-padded
/// from one counter so BTreeMap iteration order is insertion order, which
/// gives the stable ordering the cursor contract relies on.
#[derive(Debug, Default)]
pub(crate) struct ConnectorState {
    pub applications: BTreeMap<Id, Application>,
    pub runtimes: BTreeMap<Id, Runtime>,
    pub apis: BTreeMap<Id, ApiDefinition>,
    pub event_apis: BTreeMap<Id, EventApiDefinition>,
    pub documents: BTreeMap<Id, Document>,
    pub webhooks: BTreeMap<Id, Webhook>,
    /// Keyed by the (api, runtime) pair; a runtime auth has no own ID.
    pub runtime_auths: BTreeMap<(Id, Id), RuntimeAuth>,
    pub health_checks: Vec<HealthCheck>,
    /// (api, runtime) pairs allowed to bind auth.
    pub entitlements: BTreeSet<(Id, Id)>,
    /// Declared spec sources, keyed by API / event API ID.
    pub spec_sources: BTreeMap<Id, SpecSource>,
    next_id: u64,
}

impl ConnectorState {
    pub fn next_id(&mut self, prefix: &str) -> Id {
        self.next_id += 1;
        Id::new(format!("{prefix}-{:06}", self.next_id))
    }
}

/// Stored records that carry labels and annotations; lets application and
/// runtime share one implementation of the labeled-entity contract.
pub(crate) trait LabeledRecord {
    const KIND: &'static str;

    fn labels(&self) -> &Labels;
    fn labels_mut(&mut self) -> &mut Labels;
    fn annotations_mut(&mut self) -> &mut Annotations;
}

impl LabeledRecord for Application {
    const KIND: &'static str = "application";

    fn labels(&self) -> &Labels {
        &self.labels
    }

    fn labels_mut(&mut self) -> &mut Labels {
        &mut self.labels
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

impl LabeledRecord for Runtime {
    const KIND: &'static str = "runtime";

    fn labels(&self) -> &Labels {
        &self.labels
    }

    fn labels_mut(&mut self) -> &mut Labels {
        &mut self.labels
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}
