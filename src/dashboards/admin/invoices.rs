//! Mess invoice dashboard

use crate::models::{Invoice, Status};
use crate::services::{HostelApi, NotificationService};
use crate::state::reconcile::{Keyed, KeyedList};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::{HostelMateError, Result};
use crate::utils::logging;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to fetch invoices!");
const GENERATE: OperationMessages =
    OperationMessages::new(Some("Invoices generated successfully!"), "Failed to generate invoices!");
const APPROVE: OperationMessages =
    OperationMessages::new(Some("Invoice approved successfully!"), "Failed to approve invoice!")
        .with_transport("An unexpected error occurred.");

impl Keyed for Invoice {
    fn key(&self) -> &str {
        &self.id
    }
}

/// All invoices plus the pending subset awaiting approval
#[derive(Debug, Clone, Default)]
pub struct InvoiceLedger {
    pub all: KeyedList<Invoice>,
    pub pending: KeyedList<Invoice>,
}

impl InvoiceLedger {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        let pending = invoices
            .iter()
            .filter(|invoice| invoice.status.is_pending())
            .cloned();
        Self {
            pending: KeyedList::from_items(pending),
            all: KeyedList::from_items(invoices),
        }
    }

    pub fn approved_count(&self) -> usize {
        self.all.iter().filter(|invoice| invoice.status.is(Status::APPROVED)).count()
    }

    /// Clear every pending invoice of `student_id`; returns how many moved
    fn approve(&mut self, student_id: &str) -> usize {
        let approved = self
            .pending
            .remove_where(|invoice| invoice.student_id() == student_id);
        for invoice in &approved {
            self.all.update(&invoice.id, |entry| {
                entry.status = Status::new(Status::APPROVED);
            });
        }
        approved.len()
    }
}

/// The administrator's invoice dashboard
#[derive(Debug)]
pub struct InvoicesView {
    api: HostelApi,
    dashboard: Dashboard<InvoiceLedger>,
}

impl InvoicesView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("invoices", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<InvoiceLedger> {
        &self.dashboard
    }

    pub fn ledger(&self) -> &InvoiceLedger {
        self.dashboard.data()
    }

    pub async fn load(&mut self) -> Outcome {
        let api = &self.api;
        let fetch = async move {
            let invoices = api.hostel_invoices().await?;
            Ok::<_, HostelMateError>(InvoiceLedger::new(invoices))
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    /// Ask the server to issue this month's invoices, then reload the ledger
    pub async fn generate(&mut self) -> Outcome {
        let (outcome, _) = self.dashboard.run(self.api.generate_invoices(), &GENERATE).await;
        if !outcome.is_applied() {
            return outcome;
        }

        logging::log_mutation("invoices", "generate", None);
        self.load().await
    }

    /// Approve the pending invoices of one student
    pub async fn approve(&mut self, student_id: &str) -> Result<Outcome> {
        let outcome = self
            .dashboard
            .mutate(
                self.api.update_invoice(student_id, Status::APPROVED),
                &APPROVE,
                |ledger, ()| {
                    let approved = ledger.approve(student_id);
                    logging::log_reconcile("invoices", "approve", student_id, approved > 0);
                },
            )
            .await?;

        if outcome.is_applied() {
            logging::log_mutation("invoices", "approve", Some(student_id));
        }
        Ok(outcome)
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}
