//! Canned backend records

use serde_json::{json, Value};

pub const HOSTEL_ID: &str = "h1";
pub const STUDENT_ID: &str = "s1";

pub fn student_json(id: &str, name: &str, room: u32) -> Value {
    json!({
        "_id": id,
        "name": name,
        "cms_id": 400000 + room,
        "room_no": room,
        "email": format!("{}@hostel.test", id),
    })
}

pub fn roster_json() -> Value {
    json!([
        student_json("s1", "Ayesha Khan", 101),
        student_json("s2", "Bilal Ahmed", 102),
        student_json("s3", "Sana Malik", 103),
    ])
}

pub fn complaint_json(id: &str, status: &str, date: &str) -> Value {
    json!({
        "_id": id,
        "type": "Electric",
        "title": format!("Complaint {}", id),
        "description": "Fan is not working",
        "student": { "name": "Ayesha Khan", "room_no": 101 },
        "status": status,
        "date": date,
    })
}

pub fn invoice_json(id: &str, student: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "student": student,
        "amount": 4500,
        "status": status,
        "title": "Mess Fee",
        "date": "2026-10-01T00:00:00.000Z",
    })
}

pub fn attendance_json(status: &str, date: &str) -> Value {
    json!({ "status": status, "date": date })
}

/// Storage file contents for an admin login, values encoded as strings
pub fn admin_storage() -> Value {
    json!({
        "admin": json!({ "_id": "a1", "name": "Warden Saeed", "email": "warden@hostel.test" }).to_string(),
        "hostel": json!({ "_id": HOSTEL_ID, "name": "Hostel 3" }).to_string(),
    })
}

/// Storage file contents for a student login
pub fn student_storage() -> Value {
    json!({
        "student": json!({ "_id": STUDENT_ID, "name": "Ayesha Khan", "cms_id": "400101", "room_no": "101" }).to_string(),
    })
}
