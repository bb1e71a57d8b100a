//! API extension service tests

use crate::common::{TEST_TOKEN, admin_query, client_for, error_xml, service_path};
use plugin_lifecycle::services::{QUERY_PATH, SERVICE_CONTENT_TYPE};
use plugin_lifecycle::{ApiExtensionService, LifecycleError, ManagedEntity};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_sends_versioned_xml_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(header("x-vcloud-authorization", TEST_TOKEN))
        .and(header("accept", "application/*+xml;version=29.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(admin_query(
            &server.uri(),
            &[("gcp-ticketing", true), ("reports", false)],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));
    let records = service.list().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "gcp-ticketing");
    assert!(records[0].is_enabled());
    assert_eq!(records[1].namespace, "local.reports");
    assert_eq!(records[1].key(), format!("{}{}", server.uri(), service_path(2)));
}

#[tokio::test]
async fn test_list_single_and_empty_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(admin_query(&server.uri(), &[("only", false)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(admin_query(&server.uri(), &[])))
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));

    let single = service.list().await.unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].name, "only");

    let empty = service.list().await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_enable_puts_service_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(admin_query(&server.uri(), &[("reports", false)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(service_path(1)))
        .and(header("content-type", SERVICE_CONTENT_TYPE))
        .and(body_string_contains(r#"name="reports""#))
        .and(body_string_contains("<vmext:Namespace>local.reports</vmext:Namespace>"))
        .and(body_string_contains("<vmext:Enabled>true</vmext:Enabled>"))
        .and(body_string_contains("<vmext:RoutingKey>reports</vmext:RoutingKey>"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));
    let records = service.list().await.unwrap();
    service.set_enabled(&records[0], true).await.unwrap();
}

#[tokio::test]
async fn test_refused_delete_carries_vendor_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(admin_query(&server.uri(), &[("reports", true)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(service_path(1)))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(error_xml(400, "Service reports must be disabled first.")),
        )
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));
    let records = service.list().await.unwrap();
    let err = service.delete(&records[0]).await.unwrap_err();

    match &err {
        LifecycleError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Service reports must be disabled first.");
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(err.is_precondition_failure());
}

#[tokio::test]
async fn test_malformed_query_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<QueryResultRecords>"))
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));
    let err = service.list().await.unwrap_err();
    assert!(matches!(err, LifecycleError::Xml(_)));
}

#[tokio::test]
async fn test_unauthorized_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let service = ApiExtensionService::new(client_for(&server));
    let err = service.list().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Unauthorized"));
    assert!(!err.is_precondition_failure());
}
