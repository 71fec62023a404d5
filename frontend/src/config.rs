//! Application configuration.
//!
//! Constants hold the fixed limits of the widget. The API base URL is
//! injected through [`WidgetConfig`] so the same build can target a local
//! server or a deployed one (`UPLOAD_API_URL` at build time).

/// Default validation API base URL, used when `UPLOAD_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Upload endpoint path, relative to the API base URL.
pub const UPLOAD_PATH: &str = "upload_and_validate";

/// Multipart field name shared by every attached file.
pub const UPLOAD_FIELD: &str = "files";

/// Accepted file extension (compared case-insensitively).
pub const ACCEPTED_EXTENSION: &str = ".pdf";

/// Maximum file size for upload (in bytes).
///
/// 200 MiB limit, per file.
pub const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Delay before the progress bar is hidden after an attempt ends.
pub const PROGRESS_HIDE_DELAY_MS: u32 = 3_000;

/// Maximum activity entries to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Runtime configuration handed to the widget at mount time.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Base URL of the validation API, with or without trailing slash.
    pub api_base_url: String,
    /// Per-file size limit in bytes.
    pub max_file_size: u64,
    /// How long the progress bar stays visible after completion.
    pub progress_hide_delay_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl WidgetConfig {
    /// Build a config pointing at `base_url`, with default limits.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            max_file_size: MAX_FILE_SIZE,
            progress_hide_delay_ms: PROGRESS_HIDE_DELAY_MS,
        }
    }

    /// Config baked in at build time.
    ///
    /// `trunk build` forwards the environment, so `UPLOAD_API_URL=https://...`
    /// selects the deployed API.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("UPLOAD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Join the base URL with `path` without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        self.endpoint(UPLOAD_PATH)
    }

    /// URL of the API root, answered by the status probe.
    pub fn status_url(&self) -> String {
        self.endpoint("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_ignores_trailing_slash() {
        let plain = WidgetConfig::with_base_url("https://api.example.org");
        let slashed = WidgetConfig::with_base_url("https://api.example.org/");

        assert_eq!(plain.upload_url(), "https://api.example.org/upload_and_validate");
        assert_eq!(plain.upload_url(), slashed.upload_url());
    }

    #[test]
    fn test_status_url_is_root() {
        let config = WidgetConfig::with_base_url("http://localhost:8000//");
        assert_eq!(config.status_url(), "http://localhost:8000/");
    }

    #[test]
    fn test_default_limits() {
        let config = WidgetConfig::default();
        assert_eq!(config.max_file_size, 209_715_200);
        assert_eq!(config.progress_hide_delay_ms, 3_000);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}
