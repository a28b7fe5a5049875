//! Status records reported by the server.

use serde::{Deserialize, Serialize};

/// One server-reported record describing the lifecycle of a submitted job.
///
/// `started` and `ended` are server-formatted timestamp strings carried
/// verbatim; no date format is part of the contract. The server makes no
/// ordering guarantee on the list it returns - consumers sort by whatever
/// key suits their display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadItem {
    /// Title of the processed item
    pub title: String,
    /// Free-text status label; classify with [`StatusCategory::classify`]
    pub status: String,
    /// When processing started (opaque server formatting)
    pub started: String,
    /// When processing ended (opaque server formatting)
    pub ended: String,
    /// Error message when processing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errored: Option<String>,
    /// Where the server stored the result
    pub file_path: String,
    /// Resolution the item was processed at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Original submitted URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DownloadItem {
    /// Classify this record's status label.
    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

/// Coarse classification of a free-text status label.
///
/// The server does not define a closed status enum on the wire; consumers
/// match on substrings. That fragile matching lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Processing failed
    Error,
    /// Processing is still running
    InProgress,
    /// Processing finished successfully
    Completed,
    /// Label matched none of the known patterns
    Unknown,
}

impl StatusCategory {
    /// Classify a status label by case-insensitive substring match.
    ///
    /// Match order is significant: a label like "Download error" is an
    /// error, not a completion.
    pub fn classify(status: &str) -> Self {
        let lowercase = status.to_lowercase();
        if lowercase.contains("error") {
            Self::Error
        } else if lowercase.contains("progress") {
            Self::InProgress
        } else if lowercase.contains("download") {
            Self::Completed
        } else {
            Self::Unknown
        }
    }
}
