//! Services module
//!
//! This module contains the fetcher, notification and export services

pub mod api;
pub mod endpoints;
pub mod envelope;
pub mod export;
pub mod hostel;
pub mod notification;

// Re-export commonly used services
pub use api::ApiClient;
pub use endpoints::{Endpoint, HttpMethod};
pub use export::Download;
pub use hostel::HostelApi;
pub use notification::{
    Notification, NotificationLevel, NotificationService, NotificationSink, NotificationStats,
    TerminalSink, ToastQueue,
};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::state::context::SessionContext;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: HostelApi,
    pub notifications: NotificationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(
        settings: &Settings,
        session: Arc<SessionContext>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self> {
        let client = ApiClient::new(&settings.api)?;
        let api = HostelApi::new(client, session, &settings.api.student_list_path);
        let notifications = NotificationService::new(sink, &settings.notifications);

        Ok(Self { api, notifications })
    }
}
