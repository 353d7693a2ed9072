//! Administrator dashboards: load, mutate, reconcile and notify

mod helpers;

use std::time::Duration;
use assert_matches::assert_matches;
use helpers::*;
use serde_json::json;
use serial_test::serial;
use HostelMate::dashboards::admin::{
    AdminHomeView, AttendanceView, ComplaintsView, InvoicesView, StudentsView,
};
use HostelMate::models::Status;
use HostelMate::state::{Outcome, ViewPhase};
use HostelMate::HostelMateError;

async fn mount_roster(ctx: &TestContext) {
    ctx.mock
        .mock_success("POST", "/api/student/get-all-students", json!({ "students": roster_json() }))
        .await;
}

#[tokio::test]
#[serial]
async fn test_delete_student_keeps_order_of_others() {
    let ctx = TestContext::new().await;
    mount_roster(&ctx).await;
    ctx.mock.mock_success("DELETE", "/api/student/delete-student", json!({})).await;

    let mut view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    assert_eq!(view.load().await, Outcome::Applied);

    let outcome = view.delete("s2").await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let ids: Vec<&str> = view.students().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
    assert_eq!(ctx.toast_messages(), vec!["Student removed successfully!"]);
}

#[tokio::test]
#[serial]
async fn test_failed_delete_shows_server_message_and_keeps_state() {
    let ctx = TestContext::new().await;
    mount_roster(&ctx).await;
    ctx.mock.mock_failure("DELETE", "/api/student/delete-student", 200, "X").await;

    let mut view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    view.load().await;

    let outcome = view.delete("s2").await.unwrap();
    assert_eq!(outcome, Outcome::Failed("X".to_string()));
    assert_eq!(view.students().len(), 3);
    assert!(view.students().contains("s2"));
    assert_eq!(ctx.toast_messages(), vec!["X"]);
}

#[tokio::test]
#[serial]
async fn test_delete_before_load_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.mock.expect_no_request("DELETE", "/api/student/delete-student").await;

    let mut view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    let result = view.delete("s1").await;
    assert_matches!(result, Err(HostelMateError::InvalidStateTransition { .. }));
}

#[tokio::test]
#[serial]
async fn test_csv_export_writes_exact_text() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_success("POST", "/api/student/csv", json!({ "csv": "a,b\n1,2" })).await;

    let view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    let (outcome, exported) = view.export_csv(ctx.temp_dir.path()).await;

    assert_eq!(outcome, Outcome::Applied);
    let (download, path) = exported.unwrap();
    assert_eq!(download.filename, "students.csv");
    assert_eq!(download.mime, "text/csv");
    assert_eq!(path, ctx.temp_dir.path().join("students.csv"));
    assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "a,b\n1,2");
    assert_eq!(ctx.toast_messages(), vec!["CSV has been downloaded!"]);
}

#[tokio::test]
#[serial]
async fn test_csv_export_failure_writes_nothing() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_raw("POST", "/api/student/csv", 500, "oops").await;

    let view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    let (outcome, exported) = view.export_csv(ctx.temp_dir.path()).await;

    assert_eq!(outcome, Outcome::Failed("CSV Download failed".to_string()));
    assert!(exported.is_none());
    assert!(!ctx.temp_dir.path().join("students.csv").exists());
}

#[tokio::test]
#[serial]
async fn test_mark_attendance_moves_student_to_marked() {
    let ctx = TestContext::new().await;
    mount_roster(&ctx).await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/attendance/getHostelAttendance",
            json!({ "attendance": [{ "student": student_json("s3", "Sana Malik", 103), "status": "absent" }] }),
        )
        .await;
    ctx.mock
        .mock_success_for("POST", "/api/attendance/mark", json!({ "student": "s1", "status": "present" }), json!({}))
        .await;

    let mut view = AttendanceView::new(ctx.admin_api().await, ctx.notifications());
    assert_eq!(view.load().await, Outcome::Applied);

    let before = view.sheet().chart();
    assert_eq!((before.present, before.absent, before.unmarked), (0, 1, 2));

    let outcome = view.mark("s1", true).await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let sheet = view.sheet();
    assert_eq!(sheet.marked().get("s1").unwrap().attendance, Some(true));
    assert_eq!(sheet.present_count(), before.present + 1);
    let unmarked: Vec<&str> = sheet.unmarked().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(unmarked, vec!["s2"]);
    assert_eq!(ctx.toast_messages(), vec!["Attendance updated!"]);
}

#[tokio::test]
#[serial]
async fn test_marking_a_marked_student_is_rejected() {
    let ctx = TestContext::new().await;
    mount_roster(&ctx).await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/attendance/getHostelAttendance",
            json!({ "attendance": [{ "student": student_json("s1", "Ayesha Khan", 101), "status": "present" }] }),
        )
        .await;
    ctx.mock.expect_no_request("POST", "/api/attendance/mark").await;

    let mut view = AttendanceView::new(ctx.admin_api().await, ctx.notifications());
    view.load().await;

    let result = view.mark("s1", false).await;
    assert_matches!(result, Err(HostelMateError::InvalidInput(_)));
}

#[tokio::test]
#[serial]
async fn test_resolve_complaint_moves_to_resolved() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/complaint/hostel",
            json!({ "complaints": [
                complaint_json("c1", "pending", "2026-10-18T09:00:00.000Z"),
                complaint_json("c2", "pending", "2026-10-19T09:00:00.000Z"),
                complaint_json("c3", "solved", "2026-10-10T09:00:00.000Z"),
            ] }),
        )
        .await;
    ctx.mock.mock_success("PATCH", "/api/complaint/resolve", json!({})).await;

    let mut view = ComplaintsView::new(ctx.admin_api().await, ctx.notifications());
    view.load().await;
    let total = view.board().total();

    let outcome = view.resolve("c1").await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let board = view.board();
    assert!(!board.pending.contains("c1"));
    assert!(board.resolved.contains("c1"));
    assert_eq!(board.total(), total);
    assert_eq!(ctx.toast_messages(), vec!["Complaint Dismissed"]);

    // A reload that still reports c1 as pending keeps it resolved.
    view.load().await;
    assert!(view.board().resolved.contains("c1"));
    assert!(view.board().pending.contains("c2"));
}

#[tokio::test]
#[serial]
async fn test_resolve_complaint_transport_failure() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/complaint/hostel",
            json!({ "complaints": [complaint_json("c1", "pending", "2026-10-18T09:00:00.000Z")] }),
        )
        .await;
    ctx.mock.mock_raw("PATCH", "/api/complaint/resolve", 503, "unavailable").await;

    let mut view = ComplaintsView::new(ctx.admin_api().await, ctx.notifications());
    view.load().await;

    let outcome = view.resolve("c1").await.unwrap();
    assert_eq!(outcome, Outcome::Failed("Network error".to_string()));
    assert!(view.board().pending.contains("c1"));
    assert_eq!(view.dashboard().phase(), ViewPhase::Loaded);
}

#[tokio::test]
#[serial]
async fn test_approve_invoice_removes_it_from_pending() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/invoice/getbyid",
            json!({ "invoices": [
                invoice_json("i1", "s1", "pending"),
                invoice_json("i2", "s2", "pending"),
                invoice_json("i3", "s3", "approved"),
            ] }),
        )
        .await;
    ctx.mock
        .mock_success_for("POST", "/api/invoice/update", json!({ "student": "s1", "status": "approved" }), json!({}))
        .await;

    let mut view = InvoicesView::new(ctx.admin_api().await, ctx.notifications());
    view.load().await;
    assert_eq!(view.ledger().pending.len(), 2);

    let outcome = view.approve("s1").await.unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let ledger = view.ledger();
    assert!(!ledger.pending.contains("i1"));
    assert!(ledger.all.get("i1").unwrap().status.is(Status::APPROVED));
    assert_eq!(ledger.approved_count(), 2);
    assert_eq!(ctx.toast_messages(), vec!["Invoice approved successfully!"]);
}

#[tokio::test]
#[serial]
async fn test_generate_invoices_reloads() {
    let ctx = TestContext::new().await;
    ctx.mock.mock_success("POST", "/api/invoice/generate", json!({})).await;
    ctx.mock
        .mock_success("POST", "/api/invoice/getbyid", json!({ "invoices": [invoice_json("i9", "s1", "pending")] }))
        .await;

    let mut view = InvoicesView::new(ctx.admin_api().await, ctx.notifications());
    let outcome = view.generate().await;

    assert_eq!(outcome, Outcome::Applied);
    assert!(view.ledger().pending.contains("i9"));
    assert_eq!(ctx.toast_messages(), vec!["Invoices generated successfully!"]);
    assert_eq!(
        ctx.mock.received_paths().await,
        vec!["/api/invoice/generate", "/api/invoice/getbyid"]
    );
}

#[tokio::test]
#[serial]
async fn test_home_sections_fail_independently() {
    let ctx = TestContext::new().await;
    mount_roster(&ctx).await;
    ctx.mock.mock_failure("POST", "/api/complaint/hostel", 500, "db down").await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/suggestion/hostel",
            json!({ "suggestions": [
                { "_id": "g1", "title": "More fans", "description": "Summer", "status": "pending" },
                { "_id": "g2", "title": "Gym", "description": "", "status": "approved" },
            ] }),
        )
        .await;
    ctx.mock
        .mock_success(
            "POST",
            "/api/messoff/list",
            json!({ "list": [{
                "_id": "m1",
                "student": student_json("s2", "Bilal Ahmed", 102),
                "leaving_date": "2026-10-19T00:00:00.000Z",
                "return_date": "2026-10-23T00:00:00.000Z",
                "status": "pending",
            }] }),
        )
        .await;

    let mut view = AdminHomeView::new(ctx.admin_api().await, ctx.notifications());
    assert_eq!(view.load().await, Outcome::Applied);

    let overview = view.overview();
    assert_eq!(overview.total_students, 3);
    assert_eq!(overview.total_complaints, 0);
    assert_eq!(overview.pending_suggestions.len(), 1);
    assert_eq!(overview.messoff[0].title, "Bilal Ahmed [Room: 102]");
    assert_eq!(overview.messoff[0].from, "Oct 19");
    assert_eq!(overview.failed_sections, vec!["Unable to fetch complaints!"]);
    assert_eq!(ctx.toast_messages(), vec!["db down"]);
    assert_eq!(view.greeting().0, "Welcome Warden Saeed!");
}

#[tokio::test]
#[serial]
async fn test_teardown_discards_late_response() {
    let ctx = TestContext::new().await;
    ctx.mock
        .mock_delayed("POST", "/api/student/get-all-students", json!({ "students": roster_json() }), 500)
        .await;

    let mut view = StudentsView::new(ctx.admin_api().await, ctx.notifications());
    let lifetime = view.dashboard().lifetime();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        lifetime.cancel();
    });

    assert_eq!(view.load().await, Outcome::Discarded);
    assert!(view.students().is_empty());
    assert!(ctx.toast_messages().is_empty());
}
