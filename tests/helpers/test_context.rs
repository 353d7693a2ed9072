//! Test context for unified test setup
//!
//! Builds settings pointing at the mock backend, a recording notification
//! sink and a temporary directory for session and export files.

use std::sync::Arc;
use serde_json::Value;
use tempfile::TempDir;
use HostelMate::config::Settings;
use HostelMate::services::{ApiClient, HostelApi, NotificationService, ToastQueue};
use HostelMate::state::{AppContext, SessionContext, SessionStore};

use super::hostel_mock::HostelMockServer;
use super::test_data::{admin_storage, student_storage};

/// Unified test context that manages all test components
pub struct TestContext {
    pub mock: HostelMockServer,
    pub toasts: Arc<ToastQueue>,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mock = HostelMockServer::new().await;
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut settings = Settings::default();
        settings.api.base_url = mock.base_url();
        settings.api.timeout_seconds = 5;
        settings.session.storage_path = temp_dir.path().join("session.json").display().to_string();
        settings.export.output_dir = temp_dir.path().display().to_string();

        Self {
            mock,
            toasts: Arc::new(ToastQueue::new(10)),
            settings,
            temp_dir,
        }
    }

    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.toasts.clone(), &self.settings.notifications)
    }

    pub fn api(&self, session: SessionContext) -> HostelApi {
        let client = ApiClient::new(&self.settings.api).expect("Failed to build client");
        HostelApi::new(client, Arc::new(session), &self.settings.api.student_list_path)
    }

    /// Write `storage` to the session file and read it back
    pub async fn session_from(&self, storage: Value) -> SessionContext {
        tokio::fs::write(&self.settings.session.storage_path, storage.to_string())
            .await
            .expect("Failed to write session storage");
        SessionStore::new(&self.settings.session.storage_path)
            .load_context()
            .await
            .expect("Failed to load session")
    }

    pub async fn admin_api(&self) -> HostelApi {
        let session = self.session_from(admin_storage()).await;
        self.api(session)
    }

    pub async fn student_api(&self) -> HostelApi {
        let session = self.session_from(student_storage()).await;
        self.api(session)
    }

    pub async fn app_context(&self, storage: Value) -> AppContext {
        let session = self.session_from(storage).await;
        AppContext::new(self.settings.clone(), session, self.toasts.clone())
            .expect("Failed to build app context")
    }

    pub fn toast_messages(&self) -> Vec<String> {
        self.toasts.messages()
    }
}
