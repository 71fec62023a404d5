//! Upload progress indicator.

use leptos::*;

#[component]
pub fn ProgressBar(
    /// Percentage, `None` while hidden
    #[prop(into)]
    progress: Signal<Option<u8>>,
) -> impl IntoView {
    let percent = move || format!("{}%", progress.get().unwrap_or(0));

    view! {
        <Show
            when=move || progress.get().is_some()
            fallback=|| view! { }
        >
            <div class="progress-container" id="progressContainer">
                <div class="progress-bar">
                    <div class="progress-fill" id="progressBar" style:width=percent></div>
                </div>
                <span class="progress-text" id="progressText">{percent}</span>
            </div>
        </Show>
    }
}
