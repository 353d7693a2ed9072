//! Invoice command handlers

use std::io::Write;
use crate::dashboards::admin::InvoicesView;
use crate::models::Invoice;
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;
use crate::utils::helpers::format_long_date;

fn view(ctx: &AppContext) -> InvoicesView {
    InvoicesView::new(ctx.services.api.clone(), ctx.notifications().clone())
}

fn write_invoice(out: &mut dyn Write, invoice: &Invoice) -> Result<()> {
    let student = invoice
        .student
        .student()
        .map(|student| format!("{} [Room: {}]", student.name, student.room_no))
        .unwrap_or_else(|| invoice.student_id().to_string());
    let date = invoice.date.map(format_long_date).unwrap_or_default();
    writeln!(
        out,
        "  {:<26} {:<30} Rs. {:<8} {:<10} {}",
        invoice.id,
        student,
        invoice.amount,
        invoice.status.as_str(),
        date
    )?;
    Ok(())
}

/// Handle `invoices list`
pub async fn handle_list(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let ledger = view.ledger();
    writeln!(out, "Pending ({}):", ledger.pending.len())?;
    for invoice in &ledger.pending {
        write_invoice(out, invoice)?;
    }
    writeln!(out, "All ({}, {} approved):", ledger.all.len(), ledger.approved_count())?;
    for invoice in &ledger.all {
        write_invoice(out, invoice)?;
    }
    Ok(outcome)
}

/// Handle `invoices generate`
pub async fn handle_generate(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.generate().await;
    if outcome.is_applied() {
        writeln!(out, "{} invoice(s) pending approval", view.ledger().pending.len())?;
    }
    Ok(outcome)
}

/// Handle `invoices approve <student>`
pub async fn handle_approve(ctx: &AppContext, student_id: &str, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let outcome = view.approve(student_id).await?;
    if outcome.is_applied() {
        writeln!(out, "{} invoice(s) pending approval", view.ledger().pending.len())?;
    }
    Ok(outcome)
}
