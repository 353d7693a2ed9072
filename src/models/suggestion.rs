//! Suggestion model

use serde::{Deserialize, Serialize};
use super::status::Status;
use super::student::StudentLink;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub student: Option<StudentLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionListResponse {
    pub suggestions: Vec<Suggestion>,
}
