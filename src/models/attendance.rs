//! Attendance models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::student::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn from_present(present: bool) -> Self {
        if present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == AttendanceStatus::Present
    }
}

/// One row of a hostel's attendance sheet, student populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelAttendanceEntry {
    pub student: Student,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// One day of a single student's attendance history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub status: AttendanceStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelAttendanceResponse {
    pub attendance: Vec<HostelAttendanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAttendanceResponse {
    pub attendance: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub student: String,
    pub status: AttendanceStatus,
}
