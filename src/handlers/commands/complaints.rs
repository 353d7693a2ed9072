//! Complaint command handlers

use std::io::Write;
use chrono::Utc;
use crate::dashboards::admin::{ComplaintRow, ComplaintsView};
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;

fn view(ctx: &AppContext) -> ComplaintsView {
    ComplaintsView::new(ctx.services.api.clone(), ctx.notifications().clone())
}

fn write_row(out: &mut dyn Write, row: &ComplaintRow) -> Result<()> {
    writeln!(
        out,
        "  {:<26} {:<18} {:<10} {:<30} {} [Room: {}]",
        row.id,
        row.date_label,
        row.kind,
        truncate_text(&row.title, 30),
        row.student,
        row.room
    )?;
    Ok(())
}

/// Handle `complaints list`
pub async fn handle_list(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let board = view.board();
    writeln!(out, "Pending ({}):", board.pending.len())?;
    for row in &board.pending {
        write_row(out, row)?;
    }
    writeln!(out, "Resolved ({}):", board.resolved.len())?;
    for row in &board.resolved {
        write_row(out, row)?;
    }

    writeln!(out, "Last 7 days:")?;
    for (day, count) in board.daily_counts(Utc::now().date_naive()) {
        writeln!(out, "  {} {}", day.format("%a %b %d"), count)?;
    }
    Ok(outcome)
}

/// Handle `complaints resolve <id>`
pub async fn handle_resolve(ctx: &AppContext, complaint_id: &str, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let outcome = view.resolve(complaint_id).await?;
    if outcome.is_applied() {
        writeln!(out, "{} pending complaint(s) left", view.board().pending.len())?;
    }
    Ok(outcome)
}
