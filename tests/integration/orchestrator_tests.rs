//! Batch orchestrator against the HTTP services

use crate::common::{ScriptedConfirm, admin_query, client_for, error_xml, plugin_json, service_path};
use plugin_lifecycle::services::{QUERY_PATH, UI_PLUGINS_PATH};
use plugin_lifecycle::{
    ApiExtensionService, AutoConfirm, BatchOrchestrator, BatchOutcome, BatchState,
    LifecycleError, Transition, UiPluginService,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_partial_enable_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UI_PLUGINS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            plugin_json("1", "Ticketing", true),
            plugin_json("2", "Reports", false)
        ])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/urn:vcloud:uiPlugin:2", UI_PLUGINS_PATH)))
        .and(body_partial_json(json!({"enabled": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut orchestrator =
        BatchOrchestrator::new(UiPluginService::new(client_for(&server)), ScriptedConfirm::default());
    orchestrator.load().await.unwrap();
    orchestrator.select_all();

    let outcome = orchestrator.run(Transition::Enable).await.unwrap();

    assert!(matches!(outcome, BatchOutcome::Completed(ref r) if r.requested == 1));
    assert_eq!(
        orchestrator.confirmation().bodies()[1],
        "1 of 2 are already enabled. Do you want to proceed?"
    );
}

#[tokio::test]
async fn test_all_enabled_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(admin_query(&server.uri(), &[("gcp-ticketing", true)])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut orchestrator = BatchOrchestrator::new(
        ApiExtensionService::new(client_for(&server)),
        ScriptedConfirm::default(),
    );
    orchestrator.load().await.unwrap();
    orchestrator.select(&["gcp-ticketing"]).unwrap();

    let outcome = orchestrator.run(Transition::Enable).await.unwrap();

    assert_eq!(outcome, BatchOutcome::AlreadySatisfied { total: 1 });
    assert_eq!(
        orchestrator.confirmation().bodies()[1],
        "All 1 API Extensions are already enabled."
    );
}

#[tokio::test]
async fn test_one_failed_request_fails_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(admin_query(
            &server.uri(),
            &[("a", true), ("b", true), ("c", true)],
        )))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(service_path(2)))
        .respond_with(ResponseTemplate::new(500).set_body_string(error_xml(500, "Broker unavailable")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/admin/extension/service/[13]$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let mut orchestrator =
        BatchOrchestrator::new(ApiExtensionService::new(client_for(&server)), AutoConfirm);
    orchestrator.load().await.unwrap();
    orchestrator.select_all();

    let err = orchestrator.run(Transition::Disable).await.unwrap_err();

    match &err {
        LifecycleError::Batch { failed, total, .. } => {
            assert_eq!((*failed, *total), (1, 3));
        }
        other => panic!("expected batch error, got {:?}", other),
    }
    assert!(err.to_string().contains("Broker unavailable"));
    assert_eq!(orchestrator.state(), BatchState::Idle);
}

#[tokio::test]
async fn test_refused_delete_disables_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(admin_query(
            &server.uri(),
            &[("a", true), ("b", true)],
        )))
        .expect(2)
        .mount(&server)
        .await;
    // the first delete of each service is refused
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(error_xml(400, "Disable the service first.")),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let mut orchestrator = BatchOrchestrator::new(
        ApiExtensionService::new(client_for(&server)),
        ScriptedConfirm::default(),
    );
    orchestrator.load().await.unwrap();
    orchestrator.select_all();

    let outcome = orchestrator.run(Transition::Delete).await.unwrap();

    match outcome {
        BatchOutcome::Completed(report) => {
            assert_eq!(report.remediated, 2);
            assert_eq!(report.succeeded, 2);
        }
        other => panic!("expected completed batch, got {:?}", other),
    }
    assert_eq!(
        orchestrator.confirmation().bodies()[1],
        "You must disable the API Extension(s) before delete."
    );

    let methods: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.method.to_string())
        .collect();
    assert_eq!(
        methods,
        vec!["GET", "DELETE", "DELETE", "PUT", "PUT", "DELETE", "DELETE", "GET"]
    );
}

#[tokio::test]
async fn test_declined_remediation_reports_refusal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(admin_query(&server.uri(), &[("a", true)])),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(error_xml(400, "Disable the service first.")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut orchestrator = BatchOrchestrator::new(
        ApiExtensionService::new(client_for(&server)),
        ScriptedConfirm::answering(&[true, false]),
    );
    orchestrator.load().await.unwrap();
    orchestrator.select_all();

    let err = orchestrator.run(Transition::Delete).await.unwrap_err();

    assert!(err.is_precondition_failure());
    assert!(err.to_string().contains("Disable the service first."));
}

#[tokio::test]
async fn test_publish_is_unsupported_for_extensions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(admin_query(&server.uri(), &[("a", true)])),
        )
        .mount(&server)
        .await;

    let mut orchestrator =
        BatchOrchestrator::new(ApiExtensionService::new(client_for(&server)), AutoConfirm);
    orchestrator.load().await.unwrap();
    orchestrator.select_all();

    let err = orchestrator.run(Transition::PublishAll).await.unwrap_err();
    assert!(matches!(err, LifecycleError::Unsupported(_)));
}
