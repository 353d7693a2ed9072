//! Student command handlers

use std::io::Write;
use crate::dashboards::student::{InvoiceRow, StudentAttendanceView, StudentHomeView, StudentInvoicesView};
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;

fn write_invoice(out: &mut dyn Write, row: &InvoiceRow) -> Result<()> {
    let marker = if row.is_paid() { "paid" } else { "pending" };
    writeln!(out, "  {:<20} {:<20} {:<12} {}", row.title, row.date, row.amount, marker)?;
    Ok(())
}

/// Handle `me home`
pub async fn handle_home(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = StudentHomeView::new(ctx.services.api.clone(), ctx.notifications().clone());
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let overview = view.overview();
    let [absent, present] = overview.chart();
    writeln!(out, "{}", view.greeting())?;
    writeln!(out, "Days Absent: {}  Days Present: {}", absent, present)?;
    writeln!(out, "Pending Invoices:")?;
    for row in &overview.pending_invoices {
        write_invoice(out, row)?;
    }
    Ok(outcome)
}

/// Handle `me attendance`
pub async fn handle_attendance(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = StudentAttendanceView::new(ctx.services.api.clone(), ctx.notifications().clone());
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let summary = view.summary();
    writeln!(out, "Total Days: {}", summary.total_days)?;
    writeln!(out, "Days Present: {}", summary.present_days())?;
    writeln!(out, "Days Absent: {}", summary.absent_days)?;
    writeln!(out, "Last 7 days:")?;
    if summary.last_week.is_empty() {
        writeln!(out, "  No attendance recorded")?;
    }
    for day in &summary.last_week {
        let mark = if day.was_present { "present" } else { "absent" };
        writeln!(out, "  {} {} {}", day.weekday, day.date, mark)?;
    }
    Ok(outcome)
}

/// Handle `me invoices`
pub async fn handle_invoices(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = StudentInvoicesView::new(ctx.services.api.clone(), ctx.notifications().clone());
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let statement = view.statement();
    writeln!(
        out,
        "Total: {}  Paid: {}  Pending: {}",
        statement.stats.total, statement.stats.paid, statement.stats.pending
    )?;
    for row in &statement.rows {
        write_invoice(out, row)?;
    }
    Ok(outcome)
}
