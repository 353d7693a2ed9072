//! Administrator home command handler

use std::io::Write;
use crate::dashboards::admin::AdminHomeView;
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;

/// Handle `home`
pub async fn handle_home(ctx: &AppContext, out: &mut dyn Write) -> Result<Outcome> {
    let mut view = AdminHomeView::new(ctx.services.api.clone(), ctx.notifications().clone());
    let outcome = view.load().await;
    if !outcome.is_applied() {
        return Ok(outcome);
    }

    let (welcome, manager) = view.greeting();
    let overview = view.overview();
    writeln!(out, "{}", welcome)?;
    writeln!(out, "{}", manager)?;
    writeln!(out)?;
    writeln!(out, "Total Students:      {}", overview.total_students)?;
    writeln!(out, "Total Complaints:    {}", overview.total_complaints)?;
    writeln!(out, "Pending Suggestions: {}", overview.pending_suggestions.len())?;

    writeln!(out, "\nMess Off Requests:")?;
    for row in &overview.messoff {
        writeln!(out, "  {} ({}) {}", row.title, row.description(), row.status.as_str())?;
    }

    writeln!(out, "\nDaily Complaints:")?;
    for day in &overview.complaint_chart {
        writeln!(out, "  {} {}", day.label(), day.count)?;
    }

    writeln!(out, "\nSuggestions:")?;
    for suggestion in &overview.pending_suggestions {
        writeln!(out, "  {}: {}", suggestion.title, suggestion.description)?;
    }
    Ok(outcome)
}
