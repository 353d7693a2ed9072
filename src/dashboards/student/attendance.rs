//! Student attendance history

use chrono::{DateTime, Utc};
use crate::models::AttendanceEntry;
use crate::services::{HostelApi, NotificationService};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::HostelMateError;
use crate::utils::helpers::{format_long_date, weekday_name, within_last_week};

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to fetch attendance!");

/// One day of the past week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: String,
    pub weekday: String,
    pub was_present: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total_days: usize,
    pub absent_days: usize,
    pub last_week: Vec<WeekDay>,
}

impl AttendanceSummary {
    pub fn new(entries: &[AttendanceEntry], now: DateTime<Utc>) -> Self {
        let absent_days = entries.iter().filter(|entry| !entry.status.is_present()).count();
        let last_week = entries
            .iter()
            .filter(|entry| within_last_week(entry.date, now))
            .map(|entry| WeekDay {
                date: format_long_date(entry.date),
                weekday: weekday_name(entry.date),
                was_present: entry.status.is_present(),
            })
            .collect();

        Self {
            total_days: entries.len(),
            absent_days,
            last_week,
        }
    }

    pub fn present_days(&self) -> usize {
        self.total_days - self.absent_days
    }

    /// Doughnut segments: absent, present
    pub fn chart(&self) -> [usize; 2] {
        [self.absent_days, self.present_days()]
    }
}

/// The student's attendance page
#[derive(Debug)]
pub struct StudentAttendanceView {
    api: HostelApi,
    dashboard: Dashboard<AttendanceSummary>,
}

impl StudentAttendanceView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("student_attendance", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<AttendanceSummary> {
        &self.dashboard
    }

    pub fn summary(&self) -> &AttendanceSummary {
        self.dashboard.data()
    }

    pub async fn load(&mut self) -> Outcome {
        self.load_at(Utc::now()).await
    }

    /// Load with the past week measured back from `now`
    pub async fn load_at(&mut self, now: DateTime<Utc>) -> Outcome {
        let api = &self.api;
        let fetch = async move {
            let entries = api.student_attendance().await?;
            Ok::<_, HostelMateError>(AttendanceSummary::new(&entries, now))
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}
