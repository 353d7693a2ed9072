//! Student directory command handlers

use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use crate::dashboards::admin::StudentsView;
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;

fn view(ctx: &AppContext) -> StudentsView {
    StudentsView::new(ctx.services.api.clone(), ctx.notifications().clone())
}

/// Handle `students list`
pub async fn handle_list(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    writeln!(out, "{:<26} {:<12} {:<28} {}", "ID", "CMS", "NAME", "ROOM")?;
    for student in view.students() {
        writeln!(out, "{:<26} {:<12} {:<28} {}", student.id, student.cms_id, student.name, student.room_no)?;
    }
    writeln!(out, "{} student(s)", view.students().len())?;

    Ok(outcome)
}

/// Handle `students delete <id>`
pub async fn handle_delete(ctx: &AppContext, student_id: &str, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = view(ctx);
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let outcome = view.delete(student_id).await?;
    if outcome.is_applied() {
        info!(student_id = %student_id, "Student deleted");
        writeln!(out, "{} student(s) remaining", view.students().len())?;
    }
    Ok(outcome)
}

/// Handle `students export`
pub async fn handle_export(ctx: &AppContext, output: Option<PathBuf>, out: &mut dyn Write) -> Result<Outcome> {
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&ctx.settings.export.output_dir));
    let view = view(ctx);

    let (outcome, exported) = view.export_csv(&output_dir).await;
    if let Some((download, path)) = exported {
        writeln!(out, "Saved {} ({} bytes) to {}", download.filename, download.content.len(), path.display())?;
    }
    Ok(outcome)
}
