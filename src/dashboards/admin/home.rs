//! Administrator landing page
//!
//! The four sections are fetched concurrently and fail independently: a
//! failed section keeps its empty default and raises its own notification
//! while the others still render.

use std::collections::BTreeMap;
use chrono::NaiveDate;
use futures::join;
use crate::models::{Complaint, MessOffRequest, Status, Suggestion};
use crate::services::{HostelApi, NotificationService};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::HostelMateError;
use crate::utils::helpers::format_short_date;
use crate::utils::logging;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to load dashboard!");
const STUDENTS_FAILED: &str = "Unable to fetch students!";
const COMPLAINTS_FAILED: &str = "Unable to fetch complaints!";
const SUGGESTIONS_FAILED: &str = "Unable to fetch suggestions!";
const MESSOFF_FAILED: &str = "Unable to fetch mess off requests!";

/// A mess-off request as listed on the home page
#[derive(Debug, Clone, PartialEq)]
pub struct MessOffRow {
    pub id: String,
    pub from: String,
    pub to: String,
    pub title: String,
    pub status: Status,
}

impl MessOffRow {
    /// e.g. "Oct 19 to Oct 23"
    pub fn description(&self) -> String {
        format!("{} to {}", self.from, self.to)
    }
}

impl From<&MessOffRequest> for MessOffRow {
    fn from(request: &MessOffRequest) -> Self {
        Self {
            id: request.id.clone(),
            from: format_short_date(request.leaving_date),
            to: format_short_date(request.return_date),
            title: format!("{} [Room: {}]", request.student.name, request.student.room_no),
            status: request.status.clone(),
        }
    }
}

/// Complaints filed on one UTC calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyComplaints {
    pub date: NaiveDate,
    pub count: usize,
}

impl DailyComplaints {
    /// Chart axis label, e.g. "10/19/2026"
    pub fn label(&self) -> String {
        self.date.format("%m/%d/%Y").to_string()
    }
}

/// Per-day complaint counts, in date order, for days that have any
pub fn complaints_per_day(complaints: &[Complaint]) -> Vec<DailyComplaints> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for complaint in complaints {
        *days.entry(complaint.date.date_naive()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyComplaints { date, count })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct AdminOverview {
    pub total_students: usize,
    pub total_complaints: usize,
    pub complaint_chart: Vec<DailyComplaints>,
    pub pending_suggestions: Vec<Suggestion>,
    pub messoff: Vec<MessOffRow>,
    /// Sections whose fetch failed
    pub failed_sections: Vec<&'static str>,
}

impl AdminOverview {
    pub fn is_complete(&self) -> bool {
        self.failed_sections.is_empty()
    }
}

/// The administrator's home dashboard
#[derive(Debug)]
pub struct AdminHomeView {
    api: HostelApi,
    dashboard: Dashboard<AdminOverview>,
}

impl AdminHomeView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("admin_home", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<AdminOverview> {
        &self.dashboard
    }

    pub fn overview(&self) -> &AdminOverview {
        self.dashboard.data()
    }

    /// "Welcome {admin}!" and "Manager, {hostel}" headings
    pub fn greeting(&self) -> (String, String) {
        let session = self.api.session();
        let admin = session
            .admin
            .as_ref()
            .and_then(|admin| admin.name.as_deref())
            .unwrap_or("Admin");
        let hostel = session
            .hostel
            .as_ref()
            .and_then(|hostel| hostel.name.as_deref())
            .unwrap_or("Hostel");
        (format!("Welcome {}!", admin), format!("Manager, {}", hostel))
    }

    pub async fn load(&mut self) -> Outcome {
        if self.dashboard.is_torn_down() {
            logging::log_discarded(self.dashboard.name(), "load");
            return Outcome::Discarded;
        }

        self.dashboard.begin_load();
        let api = &self.api;
        let fetched = self
            .dashboard
            .guard(async {
                Ok::<_, HostelMateError>(join!(
                    api.list_students(),
                    api.hostel_complaints(),
                    api.hostel_suggestions(),
                    api.messoff_requests()
                ))
            })
            .await;

        let (students, complaints, suggestions, messoff) = match fetched {
            Ok(sections) => sections,
            Err(error) => return self.dashboard.complete_load(Err(error), &LOAD),
        };

        let mut overview = AdminOverview::default();
        match students {
            Ok(students) => overview.total_students = students.len(),
            Err(error) => self.section_failed(&mut overview, STUDENTS_FAILED, error),
        }
        match complaints {
            Ok(complaints) => {
                overview.total_complaints = complaints.len();
                overview.complaint_chart = complaints_per_day(&complaints);
            }
            Err(error) => self.section_failed(&mut overview, COMPLAINTS_FAILED, error),
        }
        match suggestions {
            Ok(suggestions) => {
                overview.pending_suggestions = suggestions
                    .into_iter()
                    .filter(|suggestion| suggestion.status.is_pending())
                    .collect();
            }
            Err(error) => self.section_failed(&mut overview, SUGGESTIONS_FAILED, error),
        }
        match messoff {
            Ok(requests) => overview.messoff = requests.iter().map(MessOffRow::from).collect(),
            Err(error) => self.section_failed(&mut overview, MESSOFF_FAILED, error),
        }

        if overview.failed_sections.len() == 4 {
            self.dashboard.mark_load_failed();
            return Outcome::Failed(LOAD.failure.to_string());
        }
        self.dashboard.complete_load(Ok(overview), &LOAD)
    }

    fn section_failed(&self, overview: &mut AdminOverview, message: &'static str, error: HostelMateError) {
        logging::log_view_error(self.dashboard.name(), &error, Some(message));
        overview.failed_sections.push(message);
        self.dashboard.notify_error(error.user_message(message));
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}
