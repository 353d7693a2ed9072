//! Student landing page

use chrono::{DateTime, Utc};
use futures::join;
use crate::services::{HostelApi, NotificationService};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::HostelMateError;
use crate::utils::helpers::day_of_month;
use crate::utils::logging;
use super::invoices::InvoiceRow;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to load dashboard!");
const ATTENDANCE_FAILED: &str = "Unable to fetch attendance!";
const INVOICES_FAILED: &str = "Unable to fetch invoices!";

#[derive(Debug, Clone, Default)]
pub struct StudentOverview {
    pub days_absent: usize,
    /// Days elapsed this month, counting today
    pub days_in_month_so_far: u32,
    pub pending_invoices: Vec<InvoiceRow>,
    pub failed_sections: Vec<&'static str>,
}

impl StudentOverview {
    /// Doughnut segments: absent, present so far this month
    pub fn chart(&self) -> [usize; 2] {
        let elapsed = self.days_in_month_so_far as usize;
        [self.days_absent, elapsed.saturating_sub(self.days_absent)]
    }
}

/// The student's home dashboard
#[derive(Debug)]
pub struct StudentHomeView {
    api: HostelApi,
    dashboard: Dashboard<StudentOverview>,
}

impl StudentHomeView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("student_home", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<StudentOverview> {
        &self.dashboard
    }

    pub fn overview(&self) -> &StudentOverview {
        self.dashboard.data()
    }

    /// "Welcome {name}!"
    pub fn greeting(&self) -> String {
        let name = self.api.session().display_name().unwrap_or("Student");
        format!("Welcome {}!", name)
    }

    pub async fn load(&mut self) -> Outcome {
        self.load_at(Utc::now()).await
    }

    pub async fn load_at(&mut self, now: DateTime<Utc>) -> Outcome {
        if self.dashboard.is_torn_down() {
            logging::log_discarded(self.dashboard.name(), "load");
            return Outcome::Discarded;
        }

        self.dashboard.begin_load();
        let api = &self.api;
        let fetched = self
            .dashboard
            .guard(async {
                Ok::<_, HostelMateError>(join!(api.student_attendance(), api.student_invoices()))
            })
            .await;

        let (attendance, invoices) = match fetched {
            Ok(sections) => sections,
            Err(error) => return self.dashboard.complete_load(Err(error), &LOAD),
        };

        let mut overview = StudentOverview {
            days_in_month_so_far: day_of_month(now),
            ..StudentOverview::default()
        };
        match attendance {
            Ok(entries) => {
                overview.days_absent = entries.iter().filter(|entry| !entry.status.is_present()).count();
            }
            Err(error) => self.section_failed(&mut overview, ATTENDANCE_FAILED, error),
        }
        match invoices {
            Ok(invoices) => {
                overview.pending_invoices = invoices
                    .iter()
                    .filter(|invoice| invoice.status.is_pending())
                    .map(InvoiceRow::from)
                    .collect();
            }
            Err(error) => self.section_failed(&mut overview, INVOICES_FAILED, error),
        }

        if overview.failed_sections.len() == 2 {
            self.dashboard.mark_load_failed();
            return Outcome::Failed(LOAD.failure.to_string());
        }
        self.dashboard.complete_load(Ok(overview), &LOAD)
    }

    fn section_failed(&self, overview: &mut StudentOverview, message: &'static str, error: HostelMateError) {
        logging::log_view_error(self.dashboard.name(), &error, Some(message));
        overview.failed_sections.push(message);
        self.dashboard.notify_error(error.user_message(message));
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}
