use leptos::*;
use crate::services::{check_api, ApiStatus};

#[component]
pub fn Header(
    /// URL probed once on mount
    status_url: String,
) -> impl IntoView {
    let (status, set_status) = create_signal(ApiStatus::Checking);

    spawn_local(async move {
        let result = check_api(&status_url).await;
        match &result {
            Ok(message) => log::info!("📡 API reachable: {}", message),
            Err(e) => log::warn!("API status probe failed: {}", e),
        }
        // The header may be gone by the time the probe returns.
        let _ = set_status.try_set(ApiStatus::from(result));
    });

    view! {
        <header>
            <div class="header-left">
                <span class="logo">"LAPORAN"</span>
                <span class="badge">"PDF Validator"</span>
            </div>
            <div class="header-right">
                <div
                    class="api-status"
                    class:connected=move || status.with(ApiStatus::is_online)
                    title=move || status.with(ApiStatus::detail)
                >
                    <span class="status-dot" class:connected=move || status.with(ApiStatus::is_online)></span>
                    <span>{move || status.with(ApiStatus::label)}</span>
                </div>
            </div>
        </header>
    }
}
