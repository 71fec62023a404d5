//! UI Components for the upload widget.
//!
//! # Layout Components
//! - [`Header`] - Title bar with API status badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection, drag & drop and submission
//! - [`ProgressBar`] - Upload progress indicator
//! - [`FeedbackMessage`] - Session summary or error message
//! - [`LogsPanel`] - Widget activity log

mod header;
mod hero;
mod upload;
mod progress;
mod message;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use message::*;
pub use footer::*;
pub use logs::*;
