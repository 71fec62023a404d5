//! API status probe.
//!
//! One `GET /` on mount, so the header can show whether the validation
//! API is reachable before the user uploads anything.

use gloo_net::http::Request;

use crate::error::{AppError, AppResult};
use crate::types::ApiStatusBody;

/// Reachability of the validation API.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiStatus {
    Checking,
    Online(String),
    Offline(String),
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking API…",
            ApiStatus::Online(_) => "API online",
            ApiStatus::Offline(_) => "API offline",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ApiStatus::Online(_))
    }

    /// Tooltip text: the server greeting or the failure reason.
    pub fn detail(&self) -> String {
        match self {
            ApiStatus::Checking => String::new(),
            ApiStatus::Online(message) | ApiStatus::Offline(message) => message.clone(),
        }
    }
}

impl From<AppResult<String>> for ApiStatus {
    fn from(result: AppResult<String>) -> Self {
        match result {
            Ok(message) => ApiStatus::Online(message),
            Err(e) => ApiStatus::Offline(e.to_string()),
        }
    }
}

/// Fetch the API root greeting.
pub async fn check_api(status_url: &str) -> AppResult<String> {
    let response = Request::get(status_url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }

    response
        .json::<ApiStatusBody>()
        .await
        .map(|body| body.message)
        .map_err(|e| AppError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_probe_result() {
        let online = ApiStatus::from(Ok("Welcome".to_string()));
        assert!(online.is_online());
        assert_eq!(online.label(), "API online");
        assert_eq!(online.detail(), "Welcome");

        let offline = ApiStatus::from(Err(AppError::Status(502)));
        assert!(!offline.is_online());
        assert_eq!(offline.label(), "API offline");
        assert_eq!(offline.detail(), "Server returned status 502");
    }
}
