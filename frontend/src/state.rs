//! Upload widget state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle (error shown)
//!                       │
//!                     valid
//!                       ▼
//!                  Uploading ──done──▶ Idle (summary or error shown)
//! ```
//!
//! The model is owned by the mounted widget (a Leptos `RwSignal`) and is
//! generic over the file handle so the whole flow runs natively in tests.

use crate::config::MAX_LOG_ENTRIES;
use crate::error::{UploadError, ValidationError};
use crate::types::{format_size, LogEntry, LogLevel, SessionReport, UploadProgress};
use crate::validation::{total_size, validate_files, SelectedFile};

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Upload and Validate";

/// Submit button label while an upload is in flight.
pub const BUSY_LABEL: &str = "Processing...";

/// Prefix for every failed submission message.
const FAILURE_PREFIX: &str = "Failed to process files: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading { attempt: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "message success",
            FeedbackKind::Error => "message error",
        }
    }
}

/// Message box content.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub headline: String,
    pub lines: Vec<String>,
}

impl Feedback {
    pub fn error(headline: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            headline: headline.into(),
            lines: Vec::new(),
        }
    }

    fn from_report(report: &SessionReport) -> Self {
        Self {
            kind: FeedbackKind::Success,
            headline: report.headline(),
            lines: report.summary_lines(),
        }
    }

    fn from_validation(err: &ValidationError) -> Self {
        Self::error(err.to_string())
    }

    fn from_upload(err: &UploadError) -> Self {
        Self::error(format!("{}{}", FAILURE_PREFIX, err))
    }

    /// Headline and lines joined, as plain text.
    pub fn text(&self) -> String {
        std::iter::once(self.headline.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Files handed to the transport for one attempt.
#[derive(Clone, Debug)]
pub struct SubmitTicket<F> {
    pub attempt: u64,
    pub files: Vec<F>,
}

/// Component-local widget state.
#[derive(Clone, Debug)]
pub struct UploadWidget<F> {
    selection: Vec<F>,
    phase: Phase,
    feedback: Option<Feedback>,
    progress: Option<u8>,
    drag_active: bool,
    attempt: u64,
    activity: Vec<LogEntry>,
}

impl<F> Default for UploadWidget<F> {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            phase: Phase::Idle,
            feedback: None,
            progress: None,
            drag_active: false,
            attempt: 0,
            activity: Vec::new(),
        }
    }
}

impl<F: SelectedFile + Clone> UploadWidget<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &[F] {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Uploading { .. })
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Progress percentage; `None` when the bar is hidden.
    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn activity(&self) -> &[LogEntry] {
        &self.activity
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Replace the selection (file input change). Ignored while uploading.
    pub fn select(&mut self, files: Vec<F>) -> bool {
        if self.is_busy() {
            self.log(LogLevel::Warning, "Selection ignored: an upload is in progress");
            return false;
        }

        self.feedback = None;
        if !files.is_empty() {
            self.log(
                LogLevel::Info,
                format!(
                    "{} file(s) selected ({})",
                    files.len(),
                    format_size(total_size(&files))
                ),
            );
        }
        self.selection = files;
        true
    }

    pub fn drag_over(&mut self) {
        if !self.is_busy() {
            self.drag_active = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Take a dropped file set. Empty drops and drops during an upload
    /// leave the selection untouched.
    pub fn drop_files(&mut self, files: Vec<F>) -> bool {
        self.drag_active = false;
        if files.is_empty() {
            return false;
        }
        self.select(files)
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate the selection and enter `Uploading`.
    ///
    /// Returns `None` when already uploading or when validation fails (the
    /// error is then shown and no request must be sent).
    pub fn begin_submit(&mut self, max_size: u64) -> Option<SubmitTicket<F>> {
        if self.is_busy() {
            return None;
        }

        if let Err(err) = validate_files(&self.selection, max_size) {
            self.log(LogLevel::Warning, err.to_string());
            self.feedback = Some(Feedback::from_validation(&err));
            return None;
        }

        self.attempt += 1;
        self.phase = Phase::Uploading {
            attempt: self.attempt,
        };
        self.feedback = None;
        self.progress = Some(0);
        self.log(
            LogLevel::Info,
            format!(
                "Uploading {} file(s) ({})",
                self.selection.len(),
                format_size(total_size(&self.selection))
            ),
        );

        Some(SubmitTicket {
            attempt: self.attempt,
            files: self.selection.clone(),
        })
    }

    /// Apply a transport progress tick for `attempt`.
    pub fn record_progress(&mut self, attempt: u64, progress: UploadProgress) {
        if self.phase != (Phase::Uploading { attempt }) {
            return;
        }
        if let Some(pct) = progress.percent() {
            self.progress = Some(pct);
        }
    }

    /// Finish `attempt` with its outcome. Returns `true` when the form
    /// should be reset (successful upload).
    pub fn complete(&mut self, attempt: u64, result: Result<SessionReport, UploadError>) -> bool {
        if self.phase != (Phase::Uploading { attempt }) {
            return false;
        }
        self.phase = Phase::Idle;

        match result {
            Ok(report) => {
                self.log(LogLevel::Success, report.headline());
                self.feedback = Some(Feedback::from_report(&report));
                self.selection.clear();
                true
            }
            Err(err) => {
                let feedback = Feedback::from_upload(&err);
                self.log(LogLevel::Error, feedback.headline.clone());
                self.feedback = Some(feedback);
                false
            }
        }
    }

    /// Hide the progress bar once `attempt`'s delay has elapsed.
    ///
    /// No-op when a newer attempt has started since.
    pub fn hide_progress(&mut self, attempt: u64) -> bool {
        if attempt != self.attempt || self.is_busy() {
            return false;
        }
        self.progress = None;
        true
    }

    // -------------------------------------------------------------------------
    // Activity log
    // -------------------------------------------------------------------------

    pub fn clear_activity(&mut self) {
        self.activity.clear();
    }

    fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::now(level, message);
        match level {
            LogLevel::Error => log::error!("{}", entry.message),
            LogLevel::Warning => log::warn!("{}", entry.message),
            _ => log::info!("{}", entry.message),
        }
        self.activity.push(entry);
        if self.activity.len() > MAX_LOG_ENTRIES {
            self.activity.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use crate::validation::test_support::FakeFile;

    fn report(id: &str, projects: usize, duplicates: u64) -> SessionReport {
        SessionReport {
            session_id: Some(id.to_string()),
            projects: Some(vec![serde_json::Value::Null; projects]),
            duplicates_found: Some(duplicates),
            ..SessionReport::default()
        }
    }

    fn pdfs() -> Vec<FakeFile> {
        vec![FakeFile::new("a.pdf", 1_000), FakeFile::new("b.pdf", 2_000)]
    }

    #[test]
    fn test_invalid_submit_shows_error_and_stays_idle() {
        let mut widget = UploadWidget::<FakeFile>::new();
        assert!(widget.begin_submit(MAX_FILE_SIZE).is_none());

        let feedback = widget.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(feedback.headline, "Please select a file first.");
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.progress(), None);
    }

    #[test]
    fn test_valid_submit_enters_uploading() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        widget.select(vec![FakeFile::new("bad.txt", 1)]);
        assert!(widget.begin_submit(MAX_FILE_SIZE).is_none());

        widget.select(pdfs());
        assert!(widget.feedback().is_none());

        let ticket = widget.begin_submit(MAX_FILE_SIZE).unwrap();
        assert_eq!(ticket.attempt, 1);
        assert_eq!(ticket.files, pdfs());
        assert!(widget.is_busy());
        assert_eq!(widget.button_label(), BUSY_LABEL);
        assert_eq!(widget.progress(), Some(0));
        assert!(widget.feedback().is_none());

        // A second submit while busy is refused.
        assert!(widget.begin_submit(MAX_FILE_SIZE).is_none());
    }

    #[test]
    fn test_progress_ticks() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        let ticket = widget.begin_submit(MAX_FILE_SIZE).unwrap();

        widget.record_progress(ticket.attempt, UploadProgress { loaded: 1.0, total: 4.0 });
        assert_eq!(widget.progress(), Some(25));

        // Non-computable tick keeps the last value.
        widget.record_progress(ticket.attempt, UploadProgress { loaded: 9.0, total: 0.0 });
        assert_eq!(widget.progress(), Some(25));

        // Ticks for other attempts are dropped.
        widget.record_progress(ticket.attempt + 1, UploadProgress { loaded: 4.0, total: 4.0 });
        assert_eq!(widget.progress(), Some(25));
    }

    #[test]
    fn test_success_renders_summary_and_resets() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        let ticket = widget.begin_submit(MAX_FILE_SIZE).unwrap();

        assert!(widget.complete(ticket.attempt, Ok(report("S1", 2, 3))));

        let feedback = widget.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Success);
        let text = feedback.text();
        assert!(text.contains("S1"));
        assert!(text.contains("Reports processed: 2"));
        assert!(text.contains("Duplicate photos found: 3"));
        assert!(widget.selection().is_empty());
        assert!(!widget.is_busy());
        assert_eq!(widget.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_failure_keeps_selection() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        let ticket = widget.begin_submit(MAX_FILE_SIZE).unwrap();

        assert!(!widget.complete(ticket.attempt, Err(UploadError::Network)));
        let feedback = widget.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert_eq!(
            feedback.headline,
            "Failed to process files: A network error occurred while uploading."
        );
        assert_eq!(widget.selection().len(), 2);
        assert!(!widget.is_busy());
    }

    #[test]
    fn test_stale_hide_timer_ignored() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        let first = widget.begin_submit(MAX_FILE_SIZE).unwrap();
        widget.complete(first.attempt, Err(UploadError::MalformedResponse));

        widget.select(pdfs());
        let second = widget.begin_submit(MAX_FILE_SIZE).unwrap();

        // First attempt's timer fires while the second upload runs.
        assert!(!widget.hide_progress(first.attempt));
        assert_eq!(widget.progress(), Some(0));

        widget.complete(second.attempt, Ok(report("S2", 1, 0)));
        assert!(!widget.hide_progress(first.attempt));
        assert!(widget.hide_progress(second.attempt));
        assert_eq!(widget.progress(), None);
    }

    #[test]
    fn test_drop_matches_manual_selection() {
        let mut dropped = UploadWidget::new();
        dropped.drag_over();
        assert!(dropped.drag_active());
        assert!(dropped.drop_files(pdfs()));
        assert!(!dropped.drag_active());

        let mut picked = UploadWidget::new();
        picked.select(pdfs());

        assert_eq!(dropped.selection(), picked.selection());
        assert_eq!(
            dropped.begin_submit(MAX_FILE_SIZE).unwrap().files,
            picked.begin_submit(MAX_FILE_SIZE).unwrap().files
        );
    }

    #[test]
    fn test_drop_clears_message() {
        let mut widget = UploadWidget::<FakeFile>::new();
        widget.begin_submit(MAX_FILE_SIZE);
        assert!(widget.feedback().is_some());

        assert!(!widget.drop_files(Vec::new()));
        assert!(widget.feedback().is_some());

        widget.drop_files(pdfs());
        assert!(widget.feedback().is_none());
    }

    #[test]
    fn test_drop_ignored_while_uploading() {
        let mut widget = UploadWidget::new();
        widget.select(pdfs());
        let ticket = widget.begin_submit(MAX_FILE_SIZE).unwrap();

        widget.drag_over();
        assert!(!widget.drag_active());
        assert!(!widget.drop_files(vec![FakeFile::new("other.pdf", 5)]));
        assert_eq!(widget.selection(), ticket.files.as_slice());
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut widget = UploadWidget::<FakeFile>::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            widget.select(vec![FakeFile::new(&format!("{}.pdf", i), 1)]);
        }
        assert_eq!(widget.activity().len(), MAX_LOG_ENTRIES);
        assert_eq!(widget.activity()[0].message, "1 file(s) selected (1 B)");

        widget.clear_activity();
        assert!(widget.activity().is_empty());
    }
}
