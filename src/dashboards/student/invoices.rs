//! Student invoice list

use crate::models::{Invoice, Status};
use crate::services::{HostelApi, NotificationService};
use crate::state::view::{Dashboard, OperationMessages, Outcome};
use crate::utils::errors::HostelMateError;
use crate::utils::helpers::format_long_date;

const LOAD: OperationMessages = OperationMessages::new(None, "Unable to fetch invoices!");

/// An invoice formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub title: String,
    /// e.g. "Rs. 4500"
    pub amount: String,
    pub status: Status,
    /// Long date, empty when the backend sent none
    pub date: String,
}

impl InvoiceRow {
    pub fn is_paid(&self) -> bool {
        self.status.is(Status::PAID)
    }
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            title: invoice.title.clone().unwrap_or_default(),
            amount: format!("Rs. {}", invoice.amount),
            status: invoice.status.clone(),
            date: invoice.date.map(format_long_date).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceStats {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceStatement {
    pub rows: Vec<InvoiceRow>,
    pub stats: InvoiceStats,
}

impl InvoiceStatement {
    /// Anything not marked paid counts as pending
    pub fn new(invoices: &[Invoice]) -> Self {
        let rows: Vec<InvoiceRow> = invoices.iter().map(InvoiceRow::from).collect();
        let paid = rows.iter().filter(|row| row.is_paid()).count();

        Self {
            stats: InvoiceStats {
                total: rows.len(),
                paid,
                pending: rows.len() - paid,
            },
            rows,
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &InvoiceRow> {
        self.rows.iter().filter(|row| row.status.is_pending())
    }
}

/// The student's invoice page
#[derive(Debug)]
pub struct StudentInvoicesView {
    api: HostelApi,
    dashboard: Dashboard<InvoiceStatement>,
}

impl StudentInvoicesView {
    pub fn new(api: HostelApi, notifications: NotificationService) -> Self {
        Self {
            api,
            dashboard: Dashboard::new("student_invoices", notifications),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<InvoiceStatement> {
        &self.dashboard
    }

    pub fn statement(&self) -> &InvoiceStatement {
        self.dashboard.data()
    }

    pub async fn load(&mut self) -> Outcome {
        let api = &self.api;
        let fetch = async move {
            let invoices = api.student_invoices().await?;
            Ok::<_, HostelMateError>(InvoiceStatement::new(&invoices))
        };
        self.dashboard.load(fetch, &LOAD).await
    }

    pub fn teardown(&self) {
        self.dashboard.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::StudentLink;

    fn invoice(id: &str, status: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            student: StudentLink::Id("s1".to_string()),
            amount: "690".to_string(),
            status: Status::new(status),
            title: Some("Mess bill".to_string()),
            date: Some(Utc.with_ymd_and_hms(2026, 5, 20, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_statement_stats() {
        let statement = InvoiceStatement::new(&[
            invoice("i1", "Paid"),
            invoice("i2", "pending"),
            invoice("i3", "approved"),
        ]);
        assert_eq!(statement.stats, InvoiceStats { total: 3, paid: 1, pending: 2 });
        assert_eq!(statement.pending().count(), 1);
    }

    #[test]
    fn test_row_formatting() {
        let row = InvoiceRow::from(&invoice("i1", "pending"));
        assert_eq!(row.amount, "Rs. 690");
        assert_eq!(row.date, "May 20, 2026");
        assert_eq!(row.title, "Mess bill");
        assert!(!row.is_paid());
    }
}
