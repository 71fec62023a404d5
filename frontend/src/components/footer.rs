//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Report Validation System • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-hint">"PDF only • max 200 MB per file"</div>
        </footer>
    }
}
