//! Free-form status values shared by several backend documents

use std::fmt;
use serde::{Deserialize, Serialize};

/// Status string as the backend sends it.
///
/// Comparisons ignore ASCII case; the backend mixes "Pending" and "pending".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const PAID: &'static str = "paid";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison
    pub fn is(&self, value: &str) -> bool {
        self.0.eq_ignore_ascii_case(value)
    }

    pub fn is_pending(&self) -> bool {
        self.is(Self::PENDING)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new(Self::PENDING)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
