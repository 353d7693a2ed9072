//! Student dashboards; each needs a `student` record in the session

pub mod attendance;
pub mod home;
pub mod invoices;

pub use attendance::{AttendanceSummary, StudentAttendanceView, WeekDay};
pub use home::{StudentHomeView, StudentOverview};
pub use invoices::{InvoiceRow, InvoiceStatement, InvoiceStats, StudentInvoicesView};
