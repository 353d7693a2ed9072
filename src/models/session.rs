//! Session identity records written by the login flow

use serde::{Deserialize, Serialize};

/// Logged-in administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Hostel the administrator manages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostelProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for every hostel-scoped listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelRequest {
    pub hostel: String,
}

/// Request body for every student-scoped listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRequest {
    pub student: String,
}

/// Request body addressing a single document by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Success payload for mutations that return nothing beyond the envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {}
