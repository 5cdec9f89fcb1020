//! End-to-end contract tests: the resolver surface dispatching into the
//! in-memory connector.

use std::collections::BTreeSet;

use registry_connector::MemoryConnector;
use registry_resolvers::{ResolverError, RootResolver};
use registry_types::{
    ApiDefinitionInput, ApiSpecInput, ApplicationInput, AuthInput, Credential, DocumentFormat,
    DocumentInput, EventApiDefinitionInput, HealthCheck, HealthCheckStatusCondition,
    HealthCheckType, Id, LabelFilter, PageCursor, RuntimeInput, SpecFormat, WebhookInput,
    WebhookKind,
};

fn root(connector: &MemoryConnector) -> RootResolver {
    RootResolver::new(connector.resolver_context())
}

fn app_input(name: &str) -> ApplicationInput {
    ApplicationInput {
        name: name.to_string(),
        ..ApplicationInput::default()
    }
}

fn runtime_input(name: &str) -> RuntimeInput {
    RuntimeInput {
        name: name.to_string(),
        ..RuntimeInput::default()
    }
}

fn api_input(name: &str, group: Option<&str>) -> ApiDefinitionInput {
    ApiDefinitionInput {
        name: name.to_string(),
        target_url: format!("https://{name}.example.com"),
        group: group.map(str::to_string),
        spec: None,
    }
}

fn values(vs: &[&str]) -> Vec<String> {
    vs.iter().map(|v| (*v).to_string()).collect()
}

fn value_set(vs: &[&str]) -> BTreeSet<String> {
    vs.iter().map(|v| (*v).to_string()).collect()
}

fn basic_auth() -> AuthInput {
    AuthInput {
        credential: Credential::Basic {
            username: "svc".to_string(),
            password: "secret".to_string(),
        },
    }
}

#[tokio::test]
async fn application_by_id_matches_its_list_edge() {
    let connector = MemoryConnector::new();
    let root = root(&connector);

    let created = root
        .mutation()
        .create_application(app_input("orders"))
        .await
        .expect("create");

    let page = root
        .query()
        .applications(vec![], None, None)
        .await
        .expect("list");
    let edge = page
        .data
        .iter()
        .find(|app| app.id == created.id)
        .expect("created application present in list");

    let by_id = root.query().application(&created.id).await.expect("get");
    assert_eq!(&by_id, edge);
}

#[tokio::test]
async fn label_add_then_delete_round_trips() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let app = root
        .mutation()
        .create_application(app_input("orders"))
        .await
        .expect("create");

    let before = root
        .mutation()
        .add_application_label(&app.id, "region", values(&["eu"]))
        .await
        .expect("seed label");
    assert_eq!(before, value_set(&["eu"]));

    let expanded = root
        .mutation()
        .add_application_label(&app.id, "region", values(&["us", "apac"]))
        .await
        .expect("add");
    assert_eq!(expanded, value_set(&["eu", "us", "apac"]));

    let restored = root
        .mutation()
        .delete_application_label(&app.id, "region", values(&["us", "apac"]))
        .await
        .expect("delete");
    assert_eq!(restored, before);
}

#[tokio::test]
async fn label_add_of_present_values_is_idempotent() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let runtime = root
        .mutation()
        .create_runtime(runtime_input("prod-cluster"))
        .await
        .expect("create");

    let first = root
        .mutation()
        .add_runtime_label(&runtime.id, "region", values(&["eu", "us"]))
        .await
        .expect("add");
    let second = root
        .mutation()
        .add_runtime_label(&runtime.id, "region", values(&["eu", "us"]))
        .await
        .expect("re-add");
    assert_eq!(first, second);

    // Deleting values that were never there is equally a no-op.
    let third = root
        .mutation()
        .delete_runtime_label(&runtime.id, "region", values(&["apac"]))
        .await
        .expect("delete absent");
    assert_eq!(third, first);
}

#[tokio::test]
async fn annotation_add_overwrites_and_delete_reports_absence() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let app = root
        .mutation()
        .create_application(app_input("orders"))
        .await
        .expect("create");

    let stored = root
        .mutation()
        .add_application_annotation(&app.id, "owner", "team-a".to_string())
        .await
        .expect("set");
    assert_eq!(stored, "team-a");

    let overwritten = root
        .mutation()
        .add_application_annotation(&app.id, "owner", "team-b".to_string())
        .await
        .expect("overwrite");
    assert_eq!(overwritten, "team-b");

    let prior = root
        .mutation()
        .delete_application_annotation(&app.id, "owner")
        .await
        .expect("delete");
    assert_eq!(prior, Some("team-b".to_string()));

    let absent = root
        .mutation()
        .delete_application_annotation(&app.id, "owner")
        .await
        .expect("delete of absent key is not an error");
    assert_eq!(absent, None);
}

#[tokio::test]
async fn pagination_walks_disjoint_gap_free_slices() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();
    let mut created = Vec::new();
    for name in ["a", "b", "c", "d", "e"] {
        created.push(mutation.create_application(app_input(name)).await.expect("create").id);
    }

    let first_page = root
        .query()
        .applications(vec![], Some(2), None)
        .await
        .expect("page 1");
    assert_eq!(first_page.data.len(), 2);
    assert!(first_page.page_info.has_next_page);
    assert_eq!(first_page.total_count, Some(5));

    let mut seen: Vec<Id> = first_page.data.iter().map(|a| a.id.clone()).collect();
    let mut after = first_page.page_info.end_cursor;
    loop {
        let page = root
            .query()
            .applications(vec![], Some(2), after.take())
            .await
            .expect("next page");
        assert!(page.data.len() <= 2);
        seen.extend(page.data.iter().map(|a| a.id.clone()));
        if !page.page_info.has_next_page {
            break;
        }
        after = page.page_info.end_cursor;
    }
    assert_eq!(seen, created);
}

#[tokio::test]
async fn label_filter_selects_on_value_intersection() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let a1 = mutation.create_application(app_input("a1")).await.expect("create");
    mutation
        .add_application_label(&a1.id, "region", values(&["eu", "us"]))
        .await
        .expect("label a1");
    let a2 = mutation.create_application(app_input("a2")).await.expect("create");
    mutation
        .add_application_label(&a2.id, "region", values(&["apac"]))
        .await
        .expect("label a2");

    let filter = vec![LabelFilter::new("region", values(&["eu"]))];
    let page = root
        .query()
        .applications(filter, Some(1), None)
        .await
        .expect("filtered list");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, a1.id);
    assert!(!page.page_info.has_next_page);
}

#[tokio::test]
async fn negative_first_is_a_validation_error() {
    let connector = MemoryConnector::new();
    let root = root(&connector);

    let err = root
        .query()
        .applications(vec![], Some(-3), None)
        .await
        .expect_err("negative first must fail");
    assert_eq!(err, ResolverError::InvalidPageSize { first: -3 });
}

#[tokio::test]
async fn foreign_cursors_are_rejected() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    root.mutation()
        .create_application(app_input("orders"))
        .await
        .expect("create");

    let err = root
        .query()
        .applications(vec![], None, Some(PageCursor::new("not-a-cursor")))
        .await
        .expect_err("foreign cursor must fail");
    assert!(matches!(err, ResolverError::InvalidCursor { .. }));
}

#[tokio::test]
async fn lifecycle_returns_snapshots_and_not_found() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create");

    let updated = mutation
        .update_application(
            &app.id,
            ApplicationInput {
                name: "orders-v2".to_string(),
                description: Some("billing backend".to_string()),
                ..ApplicationInput::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.name, "orders-v2");

    // Delete hands back the last known state.
    let snapshot = mutation.delete_application(&app.id).await.expect("delete");
    assert_eq!(snapshot, updated);

    let err = mutation
        .update_application(&app.id, app_input("ghost"))
        .await
        .expect_err("update of deleted application");
    assert!(matches!(err, ResolverError::NotFound { .. }));

    let err = root.query().application(&app.id).await.expect_err("get deleted");
    assert!(matches!(err, ResolverError::NotFound { .. }));
}

#[tokio::test]
async fn blank_input_names_fail_validation() {
    let connector = MemoryConnector::new();
    let root = root(&connector);

    let err = root
        .mutation()
        .create_application(app_input("   "))
        .await
        .expect_err("blank name");
    assert_eq!(
        err,
        ResolverError::EmptyField {
            object: "application",
            field: "name"
        }
    );
}

#[tokio::test]
async fn webhooks_are_addressed_by_their_own_id_after_creation() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();
    let app = mutation.create_application(app_input("orders")).await.expect("create");

    let webhook = mutation
        .add_application_webhook(
            &app.id,
            WebhookInput {
                kind: WebhookKind::ConfigurationChanged,
                url: "https://hooks.example.com/orders".to_string(),
            },
        )
        .await
        .expect("add webhook");
    assert_eq!(webhook.application_id, app.id);

    let updated = mutation
        .update_application_webhook(
            &webhook.id,
            WebhookInput {
                kind: WebhookKind::ConfigurationChanged,
                url: "https://hooks.example.com/orders-v2".to_string(),
            },
        )
        .await
        .expect("update webhook by its own id");
    assert_eq!(updated.url, "https://hooks.example.com/orders-v2");

    let removed = mutation
        .delete_application_webhook(&webhook.id)
        .await
        .expect("delete webhook by its own id");
    assert_eq!(removed, updated);

    let err = mutation
        .add_application_webhook(
            &Id::from("application-does-not-exist"),
            WebhookInput {
                kind: WebhookKind::ConfigurationChanged,
                url: "https://hooks.example.com".to_string(),
            },
        )
        .await
        .expect_err("webhook under missing application");
    assert!(matches!(err, ResolverError::NotFound { .. }));
}

#[tokio::test]
async fn auth_binding_requires_both_sides_and_entitlement() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create app");
    let api = mutation
        .add_api(&app.id, api_input("orders-api", None))
        .await
        .expect("add api");
    let runtime = mutation
        .create_runtime(runtime_input("prod-cluster"))
        .await
        .expect("create runtime");

    let err = mutation
        .set_api_auth(&api.id, &Id::from("runtime-missing"), basic_auth())
        .await
        .expect_err("missing runtime");
    assert!(matches!(err, ResolverError::NotFound { .. }));

    let err = mutation
        .set_api_auth(&api.id, &runtime.id, basic_auth())
        .await
        .expect_err("no entitlement yet");
    assert_eq!(
        err,
        ResolverError::NotEntitled {
            api_id: api.id.clone(),
            runtime_id: runtime.id.clone(),
        }
    );

    connector.grant_entitlement(&api.id, &runtime.id).await;
    let bound = mutation
        .set_api_auth(&api.id, &runtime.id, basic_auth())
        .await
        .expect("bind auth");
    assert_eq!(bound.api_id, api.id);
    assert_eq!(bound.runtime_id, runtime.id);

    let unbound = mutation
        .delete_api_auth(&api.id, &runtime.id)
        .await
        .expect("unbind auth");
    assert_eq!(unbound, bound);

    let err = mutation
        .delete_api_auth(&api.id, &runtime.id)
        .await
        .expect_err("already unbound");
    assert!(matches!(err, ResolverError::NotFound { .. }));
}

#[tokio::test]
async fn refetch_failure_surfaces_upstream_and_keeps_stored_spec() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create app");
    let api = mutation
        .add_api(
            &app.id,
            ApiDefinitionInput {
                spec: Some(ApiSpecInput {
                    format: SpecFormat::Yaml,
                    data: Some("openapi: 3.0.0".to_string()),
                    fetch_from: Some("https://specs.example.com/orders.yaml".to_string()),
                }),
                ..api_input("orders-api", None)
            },
        )
        .await
        .expect("add api");

    connector
        .set_spec_source_document(&api.id, "openapi: 3.0.1")
        .await;
    let refreshed = mutation.refetch_api_spec(&api.id).await.expect("refetch");
    assert_eq!(refreshed.data.as_deref(), Some("openapi: 3.0.1"));

    connector.set_spec_source_reachable(&api.id, false).await;
    let err = mutation
        .refetch_api_spec(&api.id)
        .await
        .expect_err("unreachable source");
    assert!(matches!(err, ResolverError::Upstream { .. }));

    // The previously stored spec is untouched by the failed fetch.
    let apis = root
        .application()
        .apis(&app, None, None, None)
        .await
        .expect("nested apis");
    assert_eq!(apis.data[0].spec.as_ref().and_then(|s| s.data.as_deref()),
        Some("openapi: 3.0.1"));
}

#[tokio::test]
async fn nested_fields_resolve_from_parent_identity_with_group_filter() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create app");
    let other = mutation.create_application(app_input("billing")).await.expect("create other");

    mutation
        .add_api(&app.id, api_input("public-api", Some("public")))
        .await
        .expect("add api");
    mutation
        .add_api(&app.id, api_input("internal-api", Some("internal")))
        .await
        .expect("add api");
    mutation
        .add_api(&other.id, api_input("billing-api", Some("public")))
        .await
        .expect("add api");

    let all = root
        .application()
        .apis(&app, None, None, None)
        .await
        .expect("all apis");
    assert_eq!(all.data.len(), 2);
    assert!(all.data.iter().all(|api| api.application_id == app.id));

    let public = root
        .application()
        .apis(&app, Some("public".to_string()), None, None)
        .await
        .expect("grouped apis");
    assert_eq!(public.data.len(), 1);
    assert_eq!(public.data[0].name, "public-api");

    mutation
        .add_event_api(
            &app.id,
            EventApiDefinitionInput {
                name: "order-events".to_string(),
                group: None,
                spec: None,
            },
        )
        .await
        .expect("add event api");
    let events = root
        .application()
        .event_apis(&app, None, None, None)
        .await
        .expect("nested event apis");
    assert_eq!(events.data.len(), 1);

    let document = mutation
        .add_document(
            &app.id,
            DocumentInput {
                title: "Orders API guide".to_string(),
                format: DocumentFormat::Markdown,
                data: Some("# Orders".to_string()),
            },
        )
        .await
        .expect("add document");
    let documents = root
        .application()
        .documents(&app, None, None)
        .await
        .expect("nested documents");
    assert_eq!(documents.data, vec![document.clone()]);

    let gone = mutation.delete_document(&document.id).await.expect("delete document");
    assert_eq!(gone, document);
}

#[tokio::test]
async fn event_api_spec_refetch_blocks_on_the_source() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create app");
    let event_api = mutation
        .add_event_api(
            &app.id,
            EventApiDefinitionInput {
                name: "order-events".to_string(),
                group: None,
                spec: Some(ApiSpecInput {
                    format: SpecFormat::Json,
                    data: None,
                    fetch_from: Some("https://specs.example.com/events.json".to_string()),
                }),
            },
        )
        .await
        .expect("add event api");

    connector
        .set_spec_source_document(&event_api.id, "{\"asyncapi\":\"2.0.0\"}")
        .await;
    let spec = mutation
        .refetch_event_api_spec(&event_api.id)
        .await
        .expect("refetch");
    assert_eq!(spec.data.as_deref(), Some("{\"asyncapi\":\"2.0.0\"}"));

    connector.set_spec_source_reachable(&event_api.id, false).await;
    let err = mutation
        .refetch_event_api_spec(&event_api.id)
        .await
        .expect_err("unreachable source");
    assert!(matches!(err, ResolverError::Upstream { .. }));
}

#[tokio::test]
async fn health_checks_filter_by_type_membership_and_origin() {
    let connector = MemoryConnector::new();
    let root = root(&connector);

    for (origin, condition) in [
        ("application-000001", HealthCheckStatusCondition::Succeeded),
        ("application-000002", HealthCheckStatusCondition::Failed),
        ("application-000002", HealthCheckStatusCondition::Succeeded),
    ] {
        connector
            .record_health_check(HealthCheck {
                kind: HealthCheckType::ManagementPlaneApplicationHealthcheck,
                condition,
                origin: Some(Id::from(origin)),
                message: None,
            })
            .await;
    }

    let all = root
        .query()
        .health_checks(vec![], None, None, None)
        .await
        .expect("unfiltered");
    assert_eq!(all.data.len(), 3);

    let by_origin = root
        .query()
        .health_checks(
            vec![HealthCheckType::ManagementPlaneApplicationHealthcheck],
            Some(Id::from("application-000002")),
            None,
            None,
        )
        .await
        .expect("filtered");
    assert_eq!(by_origin.data.len(), 2);
    assert!(by_origin
        .data
        .iter()
        .all(|check| check.origin == Some(Id::from("application-000002"))));

    let paged = root
        .query()
        .health_checks(vec![], None, Some(2), None)
        .await
        .expect("paged");
    assert_eq!(paged.data.len(), 2);
    assert!(paged.page_info.has_next_page);
}

#[tokio::test]
async fn one_root_serves_concurrent_dispatch() {
    let connector = MemoryConnector::new();
    let root = root(&connector);
    let mutation = root.mutation();

    let app = mutation.create_application(app_input("orders")).await.expect("create app");
    mutation
        .create_runtime(runtime_input("prod-cluster"))
        .await
        .expect("create runtime");

    // Sibling fields of one response may be evaluated concurrently by the
    // hosting engine; the shared root must tolerate that.
    let query = root.query();
    let (apps, runtimes, by_id) = tokio::join!(
        query.applications(vec![], None, None),
        query.runtimes(vec![], None, None),
        query.application(&app.id),
    );
    assert_eq!(apps.expect("applications").data.len(), 1);
    assert_eq!(runtimes.expect("runtimes").data.len(), 1);
    assert_eq!(by_id.expect("by id").id, app.id);
}
