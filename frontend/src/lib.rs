//! PDF report upload widget - Rust/Leptos frontend.
//!
//! A WebAssembly widget that validates PDF reports in the browser, uploads
//! them to the validation API with progress feedback and shows the session
//! summary the API returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (API status badge)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (form, drop zone, progress, message)     │
//! │  └── LogsPanel (widget activity)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits and the injected [`WidgetConfig`]
//! - [`error`] - Validation, upload and transport errors
//! - [`types`] - API payloads, progress and log entries
//! - [`validation`] - Client-side file checks
//! - [`state`] - Upload widget state machine
//! - [`components`] - UI components
//! - [`services`] - API communication (upload, status probe)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult, TransportError, UploadError, ValidationError};

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // Progress
    UploadProgress,
    // API
    SessionReport, ProjectEntry, ErrorPayload,
};

// State
pub use state::{Feedback, FeedbackKind, Phase, UploadWidget};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    provide_meta_context();
    let config = store_value(config);

    view! {
        <Title text="Report Upload & Validation"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=move || view! { <MainContent config=config.get_value()/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent(config: WidgetConfig) -> impl IntoView {
    let status_url = config.status_url();

    view! {
        <Header status_url=status_url/>

        <div class="page">
            <Hero/>
            <UploadSection config=config/>
        </div>

        <Footer/>
    }
}
