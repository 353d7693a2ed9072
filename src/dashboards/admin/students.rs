//! Student directory dashboard

use std::path::{Path, PathBuf};
use crate::models::Student;
use crate::services::{Download, HostelApi, NotificationService};
use crate::state::reconcile::{Keyed, KeyedList};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::logging;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to fetch students!");
const DELETE: OperationMessages =
    OperationMessages::new(Some("Student removed successfully!"), "Deletion failed");
const EXPORT: OperationMessages =
    OperationMessages::new(Some("CSV has been downloaded!"), "CSV Download failed");

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Roster as shown in the directory
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    pub students: KeyedList<Student>,
}

/// The administrator's student directory
#[derive(Debug)]
pub struct StudentsView {
    api: HostelApi,
    dashboard: Dashboard<StudentDirectory>,
}

impl StudentsView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("students", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<StudentDirectory> {
        &self.dashboard
    }

    pub fn students(&self) -> &KeyedList<Student> {
        &self.dashboard.data().students
    }

    pub async fn load(&mut self) -> Outcome {
        let api = &self.api;
        let fetch = async move {
            let students = api.list_students().await?;
            Ok::<_, HostelMateError>(StudentDirectory {
                students: KeyedList::from_items(students),
            })
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    /// Delete a student and drop them from the local roster
    pub async fn delete(&mut self, student_id: &str) -> Result<Outcome> {
        let outcome = self
            .dashboard
            .mutate(self.api.delete_student(student_id), &DELETE, |directory, ()| {
                let removed = directory.students.remove(student_id).is_some();
                logging::log_reconcile("students", "remove", student_id, removed);
            })
            .await?;

        if outcome.is_applied() {
            logging::log_mutation("students", "delete", Some(student_id));
        }
        Ok(outcome)
    }

    /// Fetch the server-built CSV and save it as `students.csv` in `output_dir`
    pub async fn export_csv(&self, output_dir: &Path) -> (Outcome, Option<(Download, PathBuf)>) {
        let api = &self.api;
        let export = async move {
            let csv = api.export_csv().await?;
            let download = Download::students_csv(csv);
            let path = download.save_to(output_dir).await?;
            Ok::<_, HostelMateError>((download, path))
        };

        self.dashboard.run(export, &EXPORT).await
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}
