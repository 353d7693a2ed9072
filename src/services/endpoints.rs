//! Operation descriptors for the hostel API
//!
//! Every backend call is described by an [`Endpoint`]: a stable name used in
//! logs, the HTTP method and the path relative to the configured base URL.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Describes one backend operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: Cow<'static, str>,
}

impl Endpoint {
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path: Cow::Borrowed(path),
        }
    }

    /// Roster listing; its route comes from configuration
    pub fn list_students(path: &str) -> Self {
        Self {
            name: "list_students",
            method: HttpMethod::Post,
            path: Cow::Owned(path.to_string()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

pub const DELETE_STUDENT: Endpoint =
    Endpoint::new("delete_student", HttpMethod::Delete, "/api/student/delete-student");
pub const EXPORT_CSV: Endpoint =
    Endpoint::new("export_csv", HttpMethod::Post, "/api/student/csv");
pub const HOSTEL_ATTENDANCE: Endpoint =
    Endpoint::new("hostel_attendance", HttpMethod::Post, "/api/attendance/getHostelAttendance");
pub const MARK_ATTENDANCE: Endpoint =
    Endpoint::new("mark_attendance", HttpMethod::Post, "/api/attendance/mark");
pub const STUDENT_ATTENDANCE: Endpoint =
    Endpoint::new("student_attendance", HttpMethod::Post, "/api/attendance/get");
pub const HOSTEL_COMPLAINTS: Endpoint =
    Endpoint::new("hostel_complaints", HttpMethod::Post, "/api/complaint/hostel");
pub const RESOLVE_COMPLAINT: Endpoint =
    Endpoint::new("resolve_complaint", HttpMethod::Patch, "/api/complaint/resolve");
pub const HOSTEL_SUGGESTIONS: Endpoint =
    Endpoint::new("hostel_suggestions", HttpMethod::Post, "/api/suggestion/hostel");
pub const MESSOFF_LIST: Endpoint =
    Endpoint::new("messoff_list", HttpMethod::Post, "/api/messoff/list");
pub const HOSTEL_INVOICES: Endpoint =
    Endpoint::new("hostel_invoices", HttpMethod::Post, "/api/invoice/getbyid");
pub const GENERATE_INVOICES: Endpoint =
    Endpoint::new("generate_invoices", HttpMethod::Post, "/api/invoice/generate");
pub const UPDATE_INVOICE: Endpoint =
    Endpoint::new("update_invoice", HttpMethod::Post, "/api/invoice/update");
pub const STUDENT_INVOICES: Endpoint =
    Endpoint::new("student_invoices", HttpMethod::Post, "/api/invoice/student");
