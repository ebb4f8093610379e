use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zuvigo_chat::config::BackendConfig;
use zuvigo_chat::storage::ProfileStore;

/// Backend config pointing at a wiremock server
#[allow(dead_code)]
pub fn backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    }
}

/// Profile store living in a temporary directory
#[allow(dead_code)]
pub fn temp_store() -> (TempDir, ProfileStore) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = ProfileStore::new_with_path(dir.path().join("profile.db"))
        .expect("Failed to create profile store");
    (dir, store)
}

/// Reopen the profile store created by [`temp_store`]
#[allow(dead_code)]
pub fn reopen_store(dir: &TempDir) -> ProfileStore {
    ProfileStore::new_with_path(dir.path().join("profile.db"))
        .expect("Failed to reopen profile store")
}

/// Mount a successful completion reply on the mock server
#[allow(dead_code)]
pub async fn mount_chat_reply(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": reply })))
        .mount(server)
        .await;
}

/// Mount a successful lead-capture response on the mock server
#[allow(dead_code)]
pub async fn mount_lead_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/chat/book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(server)
        .await;
}
