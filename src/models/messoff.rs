//! Mess-off request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::status::Status;
use super::student::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessOffRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub student: Student,
    pub leaving_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessOffListResponse {
    pub list: Vec<MessOffRequest>,
}
