//! Complaint handling dashboard

use std::collections::HashSet;
use chrono::{DateTime, NaiveDate, Utc};
use crate::models::{Complaint, Status};
use crate::services::{HostelApi, NotificationService};
use crate::state::reconcile::{move_between, Keyed, KeyedList};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::helpers::{format_long_date, last_seven_days};
use crate::utils::logging;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to fetch complaints!");
const RESOLVE: OperationMessages =
    OperationMessages::new(Some("Complaint Dismissed"), "Something went wrong")
        .with_transport("Network error");

pub const RESOLVED_STATUS: &str = "resolved";

#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintRow {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub student: String,
    pub room: String,
    pub status: Status,
    pub date: DateTime<Utc>,
    pub date_label: String,
}

impl From<Complaint> for ComplaintRow {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            kind: complaint.kind,
            title: complaint.title,
            description: complaint.description,
            student: complaint.student.name,
            room: complaint.student.room_no,
            status: complaint.status,
            date_label: format_long_date(complaint.date),
            date: complaint.date,
        }
    }
}

impl Keyed for ComplaintRow {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Complaints split by status
#[derive(Debug, Clone, Default)]
pub struct ComplaintBoard {
    pub pending: KeyedList<ComplaintRow>,
    pub resolved: KeyedList<ComplaintRow>,
    /// Resolved from this session; kept out of `pending` across reloads
    resolved_here: HashSet<String>,
}

impl ComplaintBoard {
    pub fn new(complaints: Vec<Complaint>, resolved_here: HashSet<String>) -> Self {
        let mut board = Self {
            resolved_here,
            ..Self::default()
        };

        for row in complaints.into_iter().map(ComplaintRow::from) {
            if row.status.is_pending() && !board.resolved_here.contains(&row.id) {
                board.pending.add(row);
            } else {
                board.resolved.add(row);
            }
        }
        board
    }

    pub fn total(&self) -> usize {
        self.pending.len() + self.resolved.len()
    }

    /// Complaints per day for the week ending `today`, oldest first
    pub fn daily_counts(&self, today: NaiveDate) -> Vec<(NaiveDate, usize)> {
        last_seven_days(today)
            .into_iter()
            .map(|day| {
                let count = self
                    .pending
                    .iter()
                    .chain(self.resolved.iter())
                    .filter(|row| row.date.date_naive() == day)
                    .count();
                (day, count)
            })
            .collect()
    }

    fn resolve(&mut self, id: &str) -> bool {
        let moved = move_between(&mut self.pending, &mut self.resolved, id, |mut row| {
            row.status = Status::new(RESOLVED_STATUS);
            row
        });
        if moved {
            self.resolved_here.insert(id.to_string());
        }
        moved
    }
}

/// The administrator's complaint dashboard
#[derive(Debug)]
pub struct ComplaintsView {
    api: HostelApi,
    dashboard: Dashboard<ComplaintBoard>,
}

impl ComplaintsView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("complaints", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<ComplaintBoard> {
        &self.dashboard
    }

    pub fn board(&self) -> &ComplaintBoard {
        self.dashboard.data()
    }

    pub async fn load(&mut self) -> Outcome {
        let api = &self.api;
        let resolved_here = self.dashboard.data().resolved_here.clone();
        let fetch = async move {
            let complaints = api.hostel_complaints().await?;
            Ok::<_, HostelMateError>(ComplaintBoard::new(complaints, resolved_here))
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    /// Mark a pending complaint as solved
    pub async fn resolve(&mut self, complaint_id: &str) -> Result<Outcome> {
        let outcome = self
            .dashboard
            .mutate(self.api.resolve_complaint(complaint_id), &RESOLVE, |board, ()| {
                let moved = board.resolve(complaint_id);
                logging::log_reconcile("complaints", "resolve", complaint_id, moved);
            })
            .await?;

        if outcome.is_applied() {
            logging::log_mutation("complaints", "resolve", Some(complaint_id));
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
    use chrono::TimeZone;
    use crate::models::ComplaintAuthor;

    fn complaint(id: &str, status: &str, day: u32) -> Complaint {
        Complaint {
            id: id.to_string(),
            kind: "Electric".to_string(),
            title: format!("Complaint {}", id),
            description: "Fan not working".to_string(),
            student: ComplaintAuthor { name: "Ali".to_string(), room_no: "7".to_string() },
            status: Status::new(status),
            date: Utc.with_ymd_and_hms(2026, 10, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_board_splits_by_status() {
        let board = ComplaintBoard::new(
            vec![complaint("c1", "Pending", 18), complaint("c2", "solved", 19)],
            HashSet::new(),
        );
        assert!(board.pending.contains("c1"));
        assert!(board.resolved.contains("c2"));
        assert_eq!(board.pending.get("c1").unwrap().date_label, "October 18, 2026");
    }

    #[test]
    fn test_resolved_complaint_stays_resolved_on_reload() {
        let mut board = ComplaintBoard::new(vec![complaint("c1", "pending", 18)], HashSet::new());
        assert!(board.resolve("c1"));
        assert_eq!(board.total(), 1);

        // Server still reports it as pending, e.g. a stale replica.
        let reloaded = ComplaintBoard::new(vec![complaint("c1", "pending", 18)], board.resolved_here.clone());
        assert!(!reloaded.pending.contains("c1"));
        assert!(reloaded.resolved.contains("c1"));
    }

    #[test]
    fn test_daily_counts_cover_week() {
        let board = ComplaintBoard::new(
            vec![
                complaint("c1", "pending", 19),
                complaint("c2", "pending", 19),
                complaint("c3", "resolved", 13),
                complaint("c4", "pending", 1),
            ],
            HashSet::new(),
        );
        let counts = board.daily_counts(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let values: Vec<usize> = counts.iter().map(|(_, count)| *count).collect();
        assert_eq!(values, vec![1, 0, 0, 0, 0, 0, 2]);
    }
}
