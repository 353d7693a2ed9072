//! Data models module
//!
//! Wire shapes of the documents exchanged with the hostel API. The backend
//! owns these records; the client only holds per-session copies.

pub mod attendance;
pub mod complaint;
pub mod invoice;
pub mod messoff;
pub mod session;
pub mod status;
pub mod student;
pub mod suggestion;

// Re-export commonly used models
pub use attendance::{AttendanceEntry, AttendanceStatus, HostelAttendanceEntry, HostelAttendanceResponse, MarkAttendanceRequest, StudentAttendanceResponse};
pub use complaint::{Complaint, ComplaintAuthor, ComplaintListResponse};
pub use invoice::{Invoice, InvoiceListResponse, UpdateInvoiceRequest};
pub use messoff::{MessOffListResponse, MessOffRequest};
pub use session::{Ack, AdminProfile, HostelProfile, HostelRequest, IdRequest, StudentRequest};
pub use status::Status;
pub use student::{CsvExportResponse, Student, StudentLink, StudentListResponse};
pub use suggestion::{Suggestion, SuggestionListResponse};
