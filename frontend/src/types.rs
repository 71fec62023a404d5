//! Common types used across the widget.
//!
//! # Categories
//!
//! - **Log Types** - Activity entries shown in the log panel
//! - **Progress Types** - Upload byte counters
//! - **API Types** - Validation API payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Log Types
// =============================================================================

/// Activity entry severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single widget activity entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Create an entry stamped with the local wall-clock time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Progress Types
// =============================================================================

/// Bytes transmitted so far versus the request body size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UploadProgress {
    pub loaded: f64,
    pub total: f64,
}

impl UploadProgress {
    /// Rounded percentage, or `None` when the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        if !(self.total > 0.0) || !self.loaded.is_finite() {
            return None;
        }
        let pct = (self.loaded / self.total * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Session report returned by `POST /upload_and_validate`.
///
/// Every field is optional on the wire; counts read as 0 when absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier
    #[serde(rename = "id_sesi", default)]
    pub session_id: Option<String>,
    /// One entry per processed project report
    #[serde(rename = "proyek_yang_diproses", default)]
    pub projects: Option<Vec<Value>>,
    /// Duplicate photos found across the batch
    #[serde(rename = "total_duplikat_ditemukan", default)]
    pub duplicates_found: Option<u64>,
    /// Images extracted and checked
    #[serde(rename = "total_gambar_diproses", default)]
    pub images_processed: Option<u64>,
    /// Images recorded as new in the master index
    #[serde(rename = "total_file_unik_baru", default)]
    pub new_unique_files: Option<u64>,
}

/// Per-project summary inside a [`SessionReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    /// Uploaded file name
    pub file_name: String,
    /// Document completeness status, e.g. "LENGKAP"
    pub completeness: Option<String>,
}

impl SessionReport {
    pub fn project_count(&self) -> usize {
        self.projects.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn duplicate_count(&self) -> u64 {
        self.duplicates_found.unwrap_or(0)
    }

    /// Project entries that carry a file name.
    pub fn project_entries(&self) -> Vec<ProjectEntry> {
        self.projects
            .iter()
            .flatten()
            .filter_map(|project| {
                let file_name = project.get("nama_file")?.as_str()?.to_string();
                let completeness = project
                    .get("status_kelengkapan")
                    .and_then(|s| s.as_str())
                    .map(str::to_string);
                Some(ProjectEntry {
                    file_name,
                    completeness,
                })
            })
            .collect()
    }

    /// Summary headline, e.g. "Session complete (ID: S1)".
    pub fn headline(&self) -> String {
        format!(
            "Session complete (ID: {})",
            self.session_id.as_deref().unwrap_or("unknown")
        )
    }

    /// Summary lines rendered under the headline.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Reports processed: {}", self.project_count()),
            format!("Duplicate photos found: {}", self.duplicate_count()),
        ];
        if let Some(images) = self.images_processed {
            lines.push(format!("Images checked: {}", images));
        }
        if let Some(unique) = self.new_unique_files {
            lines.push(format!("New unique images recorded: {}", unique));
        }
        for project in self.project_entries() {
            match project.completeness {
                Some(status) => lines.push(format!("{}: {}", project.file_name, status)),
                None => lines.push(project.file_name),
            }
        }
        lines.push("Detailed reports are stored on the server.".to_string());
        lines
    }
}

/// Error payload returned with non-2xx statuses.
///
/// `detail` is a string for application errors and an array of
/// `{loc, msg, type}` objects for request validation errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorPayload {
    /// Human-readable message carried by the payload.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Array(items)) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        other => other.get("msg")?.as_str().map(str::to_string),
                    })
                    .collect();
                if msgs.is_empty() {
                    "Unknown error.".to_string()
                } else {
                    msgs.join("; ")
                }
            }
            Some(Value::Null) | None => "Unknown error.".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Body of `GET /` on the validation API.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiStatusBody {
    pub message: String,
}

// =============================================================================
// Formatting
// =============================================================================

/// Format a byte count with binary units ("1.50 MB").
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}
