//! Attendance command handlers

use std::io::Write;
use crate::dashboards::admin::{AttendanceRow, AttendanceView};
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;

fn view(ctx: &AppContext) -> AttendanceView {
    AttendanceView::new(ctx.services.api.clone(), ctx.notifications().clone())
}

fn write_row(out: &mut dyn Write, row: &AttendanceRow) -> Result<()> {
    let mark = match row.attendance {
        Some(true) => "present",
        Some(false) => "absent",
        None => "-",
    };
    writeln!(out, "  {:<26} {:<12} {:<28} {:<6} {}", row.id, row.cms, row.name, row.room, mark)?;
    Ok(())
}

/// Handle `attendance show`
pub async fn handle_show(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let sheet = view.sheet();
    let unmarked = sheet.unmarked();
    writeln!(out, "Unmarked ({}):", unmarked.len())?;
    for row in unmarked {
        write_row(out, row)?;
    }
    writeln!(out, "Marked ({}):", sheet.marked().len())?;
    for row in sheet.marked() {
        write_row(out, row)?;
    }

    let chart = sheet.chart();
    writeln!(
        out,
        "Present: {}  Absent: {}  Unmarked: {}",
        chart.present, chart.absent, chart.unmarked
    )?;
    Ok(outcome)
}

/// Handle `attendance mark <student> present|absent`
pub async fn handle_mark(ctx: &AppContext, student_id: &str, present: bool, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let outcome = view.mark(student_id, present).await?;
    if outcome.is_applied() {
        let chart = view.sheet().chart();
        writeln!(out, "{} marked {}; {} still unmarked", student_id, if present { "present" } else { "absent" }, chart.unmarked)?;
    }
    Ok(outcome)
}
