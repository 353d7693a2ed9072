//! Downloadable exports
//!
//! The backend builds the CSV; this module only wraps it as a named
//! `text/csv` download and writes it out.

use std::path::{Path, PathBuf};
use tracing::info;
use crate::utils::errors::Result;

pub const STUDENTS_CSV: &str = "students.csv";
pub const CSV_MIME: &str = "text/csv";

/// A file offered to the user for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl Download {
    /// The roster export, named `students.csv`
    pub fn students_csv(content: impl Into<String>) -> Self {
        Self {
            filename: STUDENTS_CSV.to_string(),
            mime: CSV_MIME,
            content: content.into(),
        }
    }

    /// `data:` URL carrying the content, for handing to a browser
    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            self.mime,
            urlencoding::encode(&self.content)
        )
    }

    /// Write the content verbatim into `dir`, returning the file path
    pub async fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(&self.filename);
        tokio::fs::write(&path, self.content.as_bytes()).await?;

        info!(path = %path.display(), bytes = self.content.len(), "Saved download");
        Ok(path)
    }
}
