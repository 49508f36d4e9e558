//! Shared test helpers for integration tests.

use std::sync::Arc;

use mockito::ServerGuard;
use serde_json::{Value, json};

use docvault_catalog::MemoryCatalog;
use docvault_core::config::AppConfig;
use docvault_core::config::gateway::GatewayConfig;
use docvault_gateway::HttpGateway;
use docvault_service::ServiceRegistry;

/// Gateway pointed at the mock server.
pub fn gateway(server: &ServerGuard, token: Option<&str>) -> HttpGateway {
    HttpGateway::new(&GatewayConfig {
        base_url: server.url(),
        timeout_seconds: 5,
        token: token.map(str::to_string),
    })
    .expect("Failed to build gateway")
}

/// Full service stack pointed at the mock server.
pub fn registry(server: &ServerGuard) -> ServiceRegistry {
    let mut config = AppConfig::default();
    config.gateway.base_url = server.url();
    config.gateway.timeout_seconds = 5;
    ServiceRegistry::new(
        config,
        Arc::new(MemoryCatalog::new()),
        Arc::new(gateway(server, None)),
    )
}

/// One version record as the backend sends it.
pub fn version_json(file_name: &str, version: &str, uploaded_on: &str) -> Value {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(s, _)| s);
    let ext = file_name.rsplit_once('.').map_or("", |(_, e)| e);
    json!({
        "fileName": file_name,
        "version": version,
        "downloadLink": format!("/uploads/{stem}-{version}.{ext}"),
        "uploadedOn": uploaded_on,
        "author": "John Doe",
        "keywords": "project, plan",
        "remark": "Initial draft"
    })
}

/// One file group as the backend sends it.
pub fn group_json(file_name: &str, versions: &[&str]) -> Value {
    let versions: Vec<Value> = versions
        .iter()
        .map(|v| version_json(file_name, v, ""))
        .collect();
    json!({ "fileName": file_name, "versions": versions })
}

/// The backend's file list body.
pub fn list_json(groups: Vec<Value>) -> String {
    Value::Array(groups).to_string()
}
