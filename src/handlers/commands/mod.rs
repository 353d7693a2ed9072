//! Command handlers module
//!
//! One handler per CLI command. Handlers drive a dashboard view, print its
//! state to the given writer and return the view's outcome; notifications
//! go through the configured sink.

pub mod attendance;
pub mod complaints;
pub mod config;
pub mod home;
pub mod invoices;
pub mod me;
pub mod students;

use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use crate::state::{AppContext, Outcome};
use crate::utils::errors::Result;

/// Command-line client for the hostel management backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file name, without extension
    #[arg(short, long, default_value = "hostelmate")]
    pub config: String,

    /// Session storage file; overrides `session.storage_path`
    #[arg(short, long)]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// All available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage the hostel's students
    Students {
        #[command(subcommand)]
        action: StudentsAction,
    },
    /// Today's attendance sheet
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },
    /// Student complaints
    Complaints {
        #[command(subcommand)]
        action: ComplaintsAction,
    },
    /// Mess invoices
    Invoices {
        #[command(subcommand)]
        action: InvoicesAction,
    },
    /// Administrator overview
    Home,
    /// Pages for the logged-in student
    Me {
        #[command(subcommand)]
        action: MeAction,
    },
    /// Print the effective settings
    Config,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum StudentsAction {
    /// List all students
    List,
    /// Delete a student by id
    Delete { id: String },
    /// Download the roster as students.csv
    Export {
        /// Directory to write to; overrides `export.output_dir`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AttendanceAction {
    /// Show marked and unmarked students
    Show,
    /// Mark a student present or absent
    Mark {
        student: String,
        #[arg(value_enum)]
        status: MarkStatus,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStatus {
    Present,
    Absent,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ComplaintsAction {
    /// List pending and resolved complaints
    List,
    /// Dismiss a pending complaint
    Resolve { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum InvoicesAction {
    /// List all and pending invoices
    List,
    /// Generate this month's invoices
    Generate,
    /// Approve a student's pending invoices
    Approve { student: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MeAction {
    Home,
    Attendance,
    Invoices,
}

/// Main command dispatcher
pub async fn handle_command(ctx: &AppContext, command: Command, out: &mut dyn Write) -> Result<Outcome> {
    debug!(command = ?command, "Dispatching command");

    match command {
        Command::Students { action } => match action {
            StudentsAction::List => students::handle_list(ctx, out).await,
            StudentsAction::Delete { id } => students::handle_delete(ctx, &id, out).await,
            StudentsAction::Export { output } => students::handle_export(ctx, output, out).await,
        },
        Command::Attendance { action } => match action {
            AttendanceAction::Show => attendance::handle_show(ctx, out).await,
            AttendanceAction::Mark { student, status } => {
                attendance::handle_mark(ctx, &student, status == MarkStatus::Present, out).await
            }
        },
        Command::Complaints { action } => match action {
            ComplaintsAction::List => complaints::handle_list(ctx, out).await,
            ComplaintsAction::Resolve { id } => complaints::handle_resolve(ctx, &id, out).await,
        },
        Command::Invoices { action } => match action {
            InvoicesAction::List => invoices::handle_list(ctx, out).await,
            InvoicesAction::Generate => invoices::handle_generate(ctx, out).await,
            InvoicesAction::Approve { student } => invoices::handle_approve(ctx, &student, out).await,
        },
        Command::Home => home::handle_home(ctx, out).await,
        Command::Me { action } => match action {
            MeAction::Home => me::handle_home(ctx, out).await,
            MeAction::Attendance => me::handle_attendance(ctx, out).await,
            MeAction::Invoices => me::handle_invoices(ctx, out).await,
        },
        Command::Config => config::handle_config(ctx, out),
    }
}
