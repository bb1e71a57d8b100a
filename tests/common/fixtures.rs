//! Response fixtures
//!
//! Bodies shaped like the management API's own responses.

use serde_json::{Value, json};

/// Path of an extension service below the mock server
pub fn service_path(index: usize) -> String {
    format!("/api/admin/extension/service/{}", index)
}

/// `QueryResultRecords` document listing `(name, enabled)` services.
///
/// Service `i` (1-based) lives at [`service_path`]`(i)` on `base`.
pub fn admin_query(base: &str, services: &[(&str, bool)]) -> String {
    let rows: String = services
        .iter()
        .enumerate()
        .map(|(i, (name, enabled))| {
            format!(
                r#"
    <AdminServiceRecord enabled="{enabled}" exchange="vcdext" isAuthorizationEnabled="false" name="{name}" namespace="local.{name}" priority="0" routingKey="{name}" href="{base}{path}"/>"#,
                enabled = enabled,
                name = name,
                base = base,
                path = service_path(i + 1)
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<QueryResultRecords xmlns="http://www.vmware.com/vcloud/v1.5" total="{total}" pageSize="25" page="1" type="application/vnd.vmware.vcloud.query.records+xml">
    <Link rel="alternate" type="application/vnd.vmware.vcloud.query.references+xml" href="{base}/api/admin/extension/service/query?format=references"/>{rows}
</QueryResultRecords>"#,
        total = services.len(),
        base = base,
        rows = rows
    )
}

/// Vendor error document
pub fn error_xml(code: u16, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error xmlns="http://www.vmware.com/vcloud/v1.5" stackTrace="" minorErrorCode="BAD_REQUEST" message="{message}" majorErrorCode="{code}"/>"#,
        message = message,
        code = code
    )
}

/// `UiPluginMetadataResponse` JSON
pub fn plugin_json(id: &str, name: &str, enabled: bool) -> Value {
    json!({
        "id": format!("urn:vcloud:uiPlugin:{}", id),
        "pluginName": name,
        "vendor": "Example Corp",
        "description": format!("{} plugin", name),
        "version": "1.2.0",
        "license": "BSD-2-Clause",
        "link": "https://example.com",
        "tenant_scoped": false,
        "provider_scoped": true,
        "enabled": enabled,
        "plugin_status": "ready",
        "resourcePath": format!("plugin-{}", id),
        "tenantLocalization": {"en": {"title": name}}
    })
}
