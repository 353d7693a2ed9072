//! Typed hostel API operations
//!
//! Each operation resolves the identifiers it needs from the injected
//! session context before anything is sent, so a missing login fails fast
//! with [`HostelMateError::MissingSession`] and no request leaves the client.

use std::sync::Arc;
use tracing::debug;
use crate::models::{
    Ack, AttendanceEntry, AttendanceStatus, Complaint, ComplaintListResponse, CsvExportResponse,
    HostelAttendanceEntry, HostelAttendanceResponse, HostelRequest, IdRequest, Invoice,
    InvoiceListResponse, MarkAttendanceRequest, MessOffListResponse, MessOffRequest, Student,
    StudentAttendanceResponse, StudentListResponse, StudentRequest, Suggestion,
    SuggestionListResponse, UpdateInvoiceRequest,
};
use crate::state::context::SessionContext;
use crate::utils::errors::{HostelMateError, Result};
use super::api::ApiClient;
use super::endpoints::{self, Endpoint};

/// Hostel API facade bound to one session
#[derive(Clone, Debug)]
pub struct HostelApi {
    client: ApiClient,
    session: Arc<SessionContext>,
    student_list: Endpoint,
}

impl HostelApi {
    pub fn new(client: ApiClient, session: Arc<SessionContext>, student_list_path: &str) -> Self {
        Self {
            client,
            session,
            student_list: Endpoint::list_students(student_list_path),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn hostel_request(&self) -> Result<HostelRequest> {
        Ok(HostelRequest {
            hostel: self.session.hostel_id()?.to_string(),
        })
    }

    fn student_request(&self) -> Result<StudentRequest> {
        Ok(StudentRequest {
            student: self.session.student_id()?.to_string(),
        })
    }

    fn require_id(value: &str, what: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(HostelMateError::InvalidInput(format!("{} id is required", what)));
        }
        Ok(())
    }

    /// Roster of the session's hostel
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        let body = self.hostel_request()?;
        let payload: StudentListResponse = self.client.call(&self.student_list, &body).await?;
        debug!(count = payload.students.len(), "Fetched students");
        Ok(payload.students)
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<()> {
        Self::require_id(student_id, "Student")?;
        let body = IdRequest { id: student_id.to_string() };
        let _: Ack = self.client.call(&endpoints::DELETE_STUDENT, &body).await?;
        Ok(())
    }

    /// Server-built CSV of the roster
    pub async fn export_csv(&self) -> Result<String> {
        let body = self.hostel_request()?;
        let payload: CsvExportResponse = self.client.call(&endpoints::EXPORT_CSV, &body).await?;
        Ok(payload.csv)
    }

    pub async fn hostel_attendance(&self) -> Result<Vec<HostelAttendanceEntry>> {
        let body = self.hostel_request()?;
        let payload: HostelAttendanceResponse =
            self.client.call(&endpoints::HOSTEL_ATTENDANCE, &body).await?;
        Ok(payload.attendance)
    }

    pub async fn mark_attendance(&self, student_id: &str, status: AttendanceStatus) -> Result<()> {
        Self::require_id(student_id, "Student")?;
        let body = MarkAttendanceRequest {
            student: student_id.to_string(),
            status,
        };
        let _: Ack = self.client.call(&endpoints::MARK_ATTENDANCE, &body).await?;
        Ok(())
    }

    /// Attendance history of the logged-in student
    pub async fn student_attendance(&self) -> Result<Vec<AttendanceEntry>> {
        let body = self.student_request()?;
        let payload: StudentAttendanceResponse =
            self.client.call(&endpoints::STUDENT_ATTENDANCE, &body).await?;
        Ok(payload.attendance)
    }

    pub async fn hostel_complaints(&self) -> Result<Vec<Complaint>> {
        let body = self.hostel_request()?;
        let payload: ComplaintListResponse =
            self.client.call(&endpoints::HOSTEL_COMPLAINTS, &body).await?;
        Ok(payload.complaints)
    }

    pub async fn resolve_complaint(&self, complaint_id: &str) -> Result<()> {
        Self::require_id(complaint_id, "Complaint")?;
        let body = IdRequest { id: complaint_id.to_string() };
        let _: Ack = self.client.call(&endpoints::RESOLVE_COMPLAINT, &body).await?;
        Ok(())
    }

    pub async fn hostel_suggestions(&self) -> Result<Vec<Suggestion>> {
        let body = self.hostel_request()?;
        let payload: SuggestionListResponse =
            self.client.call(&endpoints::HOSTEL_SUGGESTIONS, &body).await?;
        Ok(payload.suggestions)
    }

    pub async fn messoff_requests(&self) -> Result<Vec<MessOffRequest>> {
        let body = self.hostel_request()?;
        let payload: MessOffListResponse = self.client.call(&endpoints::MESSOFF_LIST, &body).await?;
        Ok(payload.list)
    }

    pub async fn hostel_invoices(&self) -> Result<Vec<Invoice>> {
        let body = self.hostel_request()?;
        let payload: InvoiceListResponse =
            self.client.call(&endpoints::HOSTEL_INVOICES, &body).await?;
        Ok(payload.invoices)
    }

    pub async fn generate_invoices(&self) -> Result<()> {
        let body = self.hostel_request()?;
        let _: Ack = self.client.call(&endpoints::GENERATE_INVOICES, &body).await?;
        Ok(())
    }

    /// Set the status of a student's invoices, e.g. "approved"
    pub async fn update_invoice(&self, student_id: &str, status: &str) -> Result<()> {
        Self::require_id(student_id, "Student")?;
        let body = UpdateInvoiceRequest {
            student: student_id.to_string(),
            status: status.to_string(),
        };
        let _: Ack = self.client.call(&endpoints::UPDATE_INVOICE, &body).await?;
        Ok(())
    }

    /// Invoices of the logged-in student
    pub async fn student_invoices(&self) -> Result<Vec<Invoice>> {
        let body = self.student_request()?;
        let payload: InvoiceListResponse =
            self.client.call(&endpoints::STUDENT_INVOICES, &body).await?;
        Ok(payload.invoices)
    }
}
