//! Daily attendance dashboard
//!
//! Students with a record for today are *marked*; everyone else on the
//! roster is *unmarked*. Only the marked list is stored. The unmarked list
//! is always derived from the roster, so the two can never overlap or
//! leave a student out.

use crate::models::{AttendanceStatus, HostelAttendanceEntry, Student};
use crate::services::{HostelApi, NotificationService};
use crate::state::reconcile::{partition_roster, Keyed, KeyedList};
use crate::state::view::{Dashboard, OperationMessages, Outcome, ViewPhase};
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::logging;
use tracing::warn;

const LOAD: OperationMessages = OperationMessages::new(None, "Failed to fetch attendance data.");
const MARK: OperationMessages =
    OperationMessages::new(Some("Attendance updated!"), "Failed to mark attendance.");

/// One student line on the attendance sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub id: String,
    pub cms: String,
    pub name: String,
    pub room: String,
    /// `None` until marked; `Some(true)` for present
    pub attendance: Option<bool>,
}

impl AttendanceRow {
    fn unmarked(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            cms: student.cms_id.clone(),
            name: student.name.clone(),
            room: student.room_no.clone(),
            attendance: None,
        }
    }

    fn marked(entry: &HostelAttendanceEntry) -> Self {
        Self {
            attendance: Some(entry.status.is_present()),
            ..Self::unmarked(&entry.student)
        }
    }
}

impl Keyed for AttendanceRow {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Today's attendance sheet
#[derive(Debug, Clone, Default)]
pub struct AttendanceSheet {
    roster: Vec<AttendanceRow>,
    marked: KeyedList<AttendanceRow>,
}

/// Doughnut segments: present, absent, unmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceChart {
    pub present: usize,
    pub absent: usize,
    pub unmarked: usize,
}

impl AttendanceSheet {
    /// Records for students missing from the roster are dropped
    pub fn new(roster: &[Student], records: &[HostelAttendanceEntry]) -> Self {
        let on_roster = |id: &str| roster.iter().any(|student| student.id == id);
        let (kept, dropped): (Vec<_>, Vec<_>) = records
            .iter()
            .partition(|record| on_roster(&record.student.id));

        for record in dropped {
            warn!(student = %record.student.id, "Attendance record for a student not on the roster");
        }

        Self {
            roster: roster.iter().map(AttendanceRow::unmarked).collect(),
            marked: KeyedList::from_items(kept.into_iter().map(AttendanceRow::marked)),
        }
    }

    pub fn marked(&self) -> &KeyedList<AttendanceRow> {
        &self.marked
    }

    /// Roster students without a record, in roster order
    pub fn unmarked(&self) -> Vec<&AttendanceRow> {
        partition_roster(&self.roster, &self.marked)
    }

    pub fn roster(&self) -> &[AttendanceRow] {
        &self.roster
    }

    pub fn present_count(&self) -> usize {
        self.marked.iter().filter(|row| row.attendance == Some(true)).count()
    }

    pub fn chart(&self) -> AttendanceChart {
        let present = self.present_count();
        AttendanceChart {
            present,
            absent: self.marked.len() - present,
            unmarked: self.unmarked().len(),
        }
    }

    fn is_unmarked(&self, student_id: &str) -> bool {
        !self.marked.contains(student_id) && self.roster.iter().any(|row| row.id == student_id)
    }

    /// Move an unmarked roster student into the marked list
    fn record(&mut self, student_id: &str, present: bool) -> bool {
        if !self.is_unmarked(student_id) {
            return false;
        }
        let row = self.roster.iter().find(|row| row.id == student_id).cloned();
        match row {
            Some(row) => {
                self.marked.add(AttendanceRow {
                    attendance: Some(present),
                    ..row
                });
                true
            }
            None => false,
        }
    }
}

/// The administrator's attendance dashboard
#[derive(Debug)]
pub struct AttendanceView {
    api: HostelApi,
    dashboard: Dashboard<AttendanceSheet>,
}

impl AttendanceView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("attendance", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<AttendanceSheet> {
        &self.dashboard
    }

    pub fn sheet(&self) -> &AttendanceSheet {
        self.dashboard.data()
    }

    /// Fetch today's records, then the roster they are partitioned against
    pub async fn load(&mut self) -> Outcome {
        let api = &self.api;
        let fetch = async move {
            let records = api.hostel_attendance().await?;
            let roster = api.list_students().await?;
            Ok::<_, HostelMateError>(AttendanceSheet::new(&roster, &records))
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    /// Mark an unmarked student present or absent
    pub async fn mark(&mut self, student_id: &str, present: bool) -> Result<Outcome> {
        if self.dashboard.phase() == ViewPhase::Loaded && !self.dashboard.data().is_unmarked(student_id) {
            return Err(HostelMateError::InvalidInput(format!(
                "Student {} is not awaiting attendance",
                student_id
            )));
        }

        let status = AttendanceStatus::from_present(present);
        let outcome = self
            .dashboard
            .mutate(self.api.mark_attendance(student_id, status), &MARK, |sheet, ()| {
                let moved = sheet.record(student_id, present);
                logging::log_reconcile("attendance", "mark", student_id, moved);
            })
            .await?;

        if outcome.is_applied() {
            logging::log_mutation("attendance", "mark", Some(student_id));
        }
        Ok(outcome)
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {}", id),
            cms_id: format!("cms-{}", id),
            room_no: "12".to_string(),
            email: None,
        }
    }

    fn record(id: &str, status: AttendanceStatus) -> HostelAttendanceEntry {
        HostelAttendanceEntry { student: student(id), status, date: None }
    }

    #[test]
    fn test_sheet_partitions_roster() {
        let roster = vec![student("s1"), student("s2"), student("s3")];
        let records = vec![record("s2", AttendanceStatus::Absent)];
        let sheet = AttendanceSheet::new(&roster, &records);

        let unmarked: Vec<&str> = sheet.unmarked().iter().map(|row| row.id.as_str()).collect();
        assert_eq!(unmarked, vec!["s1", "s3"]);
        assert_eq!(sheet.marked().get("s2").unwrap().attendance, Some(false));
        assert_eq!(sheet.chart(), AttendanceChart { present: 0, absent: 1, unmarked: 2 });
    }

    #[test]
    fn test_records_off_the_roster_are_ignored() {
        let roster = vec![student("s1"), student("s2")];
        let records = vec![record("ghost", AttendanceStatus::Present), record("s2", AttendanceStatus::Present)];
        let sheet = AttendanceSheet::new(&roster, &records);

        assert_eq!(sheet.marked().len() + sheet.unmarked().len(), roster.len());
        assert!(!sheet.marked().contains("ghost"));
        assert_eq!(sheet.chart(), AttendanceChart { present: 1, absent: 0, unmarked: 1 });
    }

    #[test]
    fn test_record_moves_once() {
        let roster = vec![student("s1"), student("s2")];
        let mut sheet = AttendanceSheet::new(&roster, &[]);

        assert!(sheet.record("s1", true));
        assert_eq!(sheet.present_count(), 1);
        assert_eq!(sheet.unmarked().len(), 1);

        assert!(!sheet.record("s1", false));
        assert!(!sheet.record("ghost", true));
        assert_eq!(sheet.marked().get("s1").unwrap().attendance, Some(true));
    }
}
