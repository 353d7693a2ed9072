//! Invoice model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::status::Status;
use super::student::StudentLink;
use crate::utils::helpers::string_or_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub student: StudentLink,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Invoice {
    pub fn student_id(&self) -> &str {
        self.student.id()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub student: String,
    pub status: String,
}
