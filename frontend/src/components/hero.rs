//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Acceptance Report Validation"</h1>
            <p class="subtitle">
                "Upload one or more PDF acceptance reports. "
                "Each report is checked for document completeness and duplicate site photos."
            </p>
        </div>
    }
}
