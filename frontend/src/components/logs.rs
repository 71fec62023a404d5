//! Widget activity log.
//!
//! Lists what the widget did during this page visit (selections, uploads,
//! results) with auto-scroll to the newest entry.

use leptos::*;

use crate::LogEntry;

/// Activity log panel component.
#[component]
pub fn LogsPanel(
    /// Entries to display, oldest first
    #[prop(into)]
    logs: Signal<Vec<LogEntry>>,
    /// Invoked by the "Clear" button
    on_clear: Callback<()>,
) -> impl IntoView {
    let logs_container = create_node_ref::<html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.with(Vec::len);

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || !logs.with(Vec::is_empty)
            fallback=|| view! { }
        >
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button
                        class="logs-clear"
                        type="button"
                        on:click=move |_| on_clear.call(())
                    >
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, entry)| (*i, entry.timestamp.clone(), entry.message.clone())
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
