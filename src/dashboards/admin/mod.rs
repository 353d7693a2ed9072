//! Administrator dashboards; each needs a `hostel` record in the session

pub mod attendance;
pub mod complaints;
pub mod home;
pub mod invoices;
pub mod students;

pub use attendance::{AttendanceChart, AttendanceRow, AttendanceSheet, AttendanceView};
pub use complaints::{ComplaintBoard, ComplaintRow, ComplaintsView};
pub use home::{AdminHomeView, AdminOverview, DailyComplaints, MessOffRow};
pub use invoices::{InvoiceLedger, InvoicesView};
pub use students::{StudentDirectory, StudentsView};
