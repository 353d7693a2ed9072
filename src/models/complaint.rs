//! Complaint model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::status::Status;
use crate::utils::helpers::string_or_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub student: ComplaintAuthor,
    #[serde(default)]
    pub status: Status,
    pub date: DateTime<Utc>,
}

/// The populated subset of the submitting student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub room_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintListResponse {
    pub complaints: Vec<Complaint>,
}
