//! UI plugin service tests

use crate::common::{TEST_TOKEN, client_for, plugin_json};
use plugin_lifecycle::services::UI_PLUGINS_PATH;
use plugin_lifecycle::{LifecycleError, Scope, UiPlugin, UiPluginService};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_listing(server: &MockServer, plugins: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(UI_PLUGINS_PATH))
        .and(header("x-vcloud-authorization", TEST_TOKEN))
        .and(header("accept", "application/json;version=29.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plugins))
        .mount(server)
        .await;
}

async fn listed(server: &MockServer) -> (UiPluginService, Vec<UiPlugin>) {
    let service = UiPluginService::new(client_for(server));
    let plugins = service.list().await.unwrap();
    (service, plugins)
}

#[tokio::test]
async fn test_list_plugins() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([plugin_json("1", "Ticketing", true), plugin_json("2", "Reports", false)]),
    )
    .await;

    let (_, plugins) = listed(&server).await;

    assert_eq!(plugins.len(), 2);
    assert_eq!(plugins[0].id, "urn:vcloud:uiPlugin:1");
    assert_eq!(plugins[0].plugin_name, "Ticketing");
    assert!(plugins[0].enabled);
    assert!(plugins[1].provider_scoped);
    assert_eq!(plugins[1].resource_path.as_deref(), Some("plugin-2"));
}

#[tokio::test]
async fn test_enable_sends_enabled_true() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([plugin_json("2", "Reports", false)])).await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/urn:vcloud:uiPlugin:2", UI_PLUGINS_PATH)))
        .and(body_partial_json(json!({
            "id": "urn:vcloud:uiPlugin:2",
            "pluginName": "Reports",
            "enabled": true,
            "tenantLocalization": {"en": {"title": "Reports"}}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (service, plugins) = listed(&server).await;
    service.set_enabled(&plugins[0], true).await.unwrap();
}

#[tokio::test]
async fn test_disable_sends_enabled_false() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([plugin_json("1", "Ticketing", true)])).await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/urn:vcloud:uiPlugin:1", UI_PLUGINS_PATH)))
        .and(body_partial_json(json!({"enabled": false})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (service, plugins) = listed(&server).await;
    service.set_enabled(&plugins[0], false).await.unwrap();
}

#[tokio::test]
async fn test_change_scope_sends_flags() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([plugin_json("1", "Ticketing", true)])).await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/urn:vcloud:uiPlugin:1", UI_PLUGINS_PATH)))
        .and(body_partial_json(json!({
            "provider_scoped": false,
            "tenant_scoped": true,
            "enabled": true
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (service, plugins) = listed(&server).await;
    service
        .change_scope(&plugins[0], Scope::from_names(&["tenant"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_publish_and_unpublish_all() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([plugin_json("1", "Ticketing", true)])).await;
    Mock::given(method("POST"))
        .and(path(format!(
            "{}/urn:vcloud:uiPlugin:1/tenants/publishAll",
            UI_PLUGINS_PATH
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "{}/urn:vcloud:uiPlugin:1/tenants/unpublishAll",
            UI_PLUGINS_PATH
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (service, plugins) = listed(&server).await;
    service.publish_all(&plugins[0]).await.unwrap();
    service.unpublish_all(&plugins[0]).await.unwrap();
}

#[tokio::test]
async fn test_delete_error_message_from_json() {
    let server = MockServer::start().await;
    mount_listing(&server, json!([plugin_json("1", "Ticketing", true)])).await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/urn:vcloud:uiPlugin:1", UI_PLUGINS_PATH)))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "minorErrorCode": "BUSY_ENTITY",
            "message": "Plugin is still enabled",
            "stackTrace": null
        })))
        .mount(&server)
        .await;

    let (service, plugins) = listed(&server).await;
    let err = service.delete(&plugins[0]).await.unwrap_err();

    match &err {
        LifecycleError::Api { status, message } => {
            assert_eq!(*status, 409);
            assert_eq!(message, "Plugin is still enabled");
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(err.is_precondition_failure());
}
