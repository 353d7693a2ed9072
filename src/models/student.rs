//! Student model

use serde::{Deserialize, Serialize};
use crate::utils::helpers::string_or_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cms_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub room_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A student reference that the backend sends either populated or as a bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentLink {
    Populated(Student),
    Id(String),
}

impl StudentLink {
    pub fn id(&self) -> &str {
        match self {
            StudentLink::Populated(student) => &student.id,
            StudentLink::Id(id) => id,
        }
    }

    pub fn student(&self) -> Option<&Student> {
        match self {
            StudentLink::Populated(student) => Some(student),
            StudentLink::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvExportResponse {
    pub csv: String,
}
