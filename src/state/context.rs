//! Session and application context
//!
//! The session identity is read once from client storage and then passed
//! around as an immutable value. Only the login flow writes the storage;
//! nothing in this crate mutates a [`SessionContext`] after construction.

use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::{AdminProfile, HostelProfile, Student};
use crate::services::{NotificationService, NotificationSink, ServiceFactory};
use crate::utils::errors::{HostelMateError, Result};

pub const ADMIN_KEY: &str = "admin";
pub const HOSTEL_KEY: &str = "hostel";
pub const STUDENT_KEY: &str = "student";

/// Who is logged in and for which hostel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub admin: Option<AdminProfile>,
    pub hostel: Option<HostelProfile>,
    pub student: Option<Student>,
}

impl SessionContext {
    /// An administrator session scoped to one hostel
    pub fn admin(admin: AdminProfile, hostel: HostelProfile) -> Self {
        Self {
            admin: Some(admin),
            hostel: Some(hostel),
            student: None,
        }
    }

    /// A student session
    pub fn student(student: Student) -> Self {
        Self {
            admin: None,
            hostel: None,
            student: Some(student),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.admin.is_none() && self.hostel.is_none() && self.student.is_none()
    }

    /// Hostel id for hostel-scoped calls
    pub fn hostel_id(&self) -> Result<&str> {
        self.hostel
            .as_ref()
            .map(|hostel| hostel.id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HostelMateError::missing_session(HOSTEL_KEY))
    }

    /// Student id for calls made on behalf of the logged-in student
    pub fn student_id(&self) -> Result<&str> {
        self.student
            .as_ref()
            .map(|student| student.id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HostelMateError::missing_session(STUDENT_KEY))
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> Option<&str> {
        if let Some(student) = &self.student {
            return Some(student.name.as_str());
        }
        self.admin.as_ref().and_then(|admin| admin.name.as_deref())
    }
}

/// Application-wide context containing services and settings
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub session: Arc<SessionContext>,
    pub services: ServiceFactory,
}

impl AppContext {
    /// Build every service around one session
    pub fn new(
        settings: Settings,
        session: SessionContext,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self> {
        let session = Arc::new(session);
        let services = ServiceFactory::new(&settings, session.clone(), sink)?;

        Ok(Self {
            settings,
            session,
            services,
        })
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.services.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn hostel(id: &str) -> HostelProfile {
        HostelProfile { id: id.to_string(), name: Some("Block A".to_string()) }
    }

    #[test]
    fn test_hostel_id_requires_hostel() {
        let session = SessionContext::default();
        assert_matches!(
            session.hostel_id(),
            Err(HostelMateError::MissingSession { key }) if key == HOSTEL_KEY
        );

        let admin = AdminProfile { id: "a1".to_string(), name: Some("Warden".to_string()), email: None };
        let session = SessionContext::admin(admin, hostel("h1"));
        assert_eq!(session.hostel_id().unwrap(), "h1");
        assert_eq!(session.display_name(), Some("Warden"));
        assert!(session.student_id().is_err());
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let session = SessionContext {
            hostel: Some(hostel("")),
            ..Default::default()
        };
        assert!(session.hostel_id().is_err());
    }
}
