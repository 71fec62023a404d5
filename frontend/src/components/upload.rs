//! PDF upload component with drag & drop support.
//!
//! Owns the widget state for its mount lifetime: selection, submission,
//! progress and the result message all live in one `RwSignal`.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{File, FileList, HtmlInputElement};

use crate::components::{FeedbackMessage, LogsPanel, ProgressBar};
use crate::config::{WidgetConfig, UPLOAD_FIELD};
use crate::services::{upload_reports, ProgressCallback, XhrTransport};
use crate::state::UploadWidget;
use crate::types::{format_size, UploadProgress};
use crate::validation::SelectedFile;

fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadSection(config: WidgetConfig) -> impl IntoView {
    let widget = create_rw_signal(UploadWidget::<File>::new());
    let config = store_value(config);
    let form_ref = create_node_ref::<html::Form>();
    let input_ref = create_node_ref::<html::Input>();

    log::debug!("Upload widget mounted (API: {})", config.with_value(|c| c.api_base_url.clone()));
    on_cleanup(|| log::debug!("Upload widget unmounted"));

    let busy = move || widget.with(UploadWidget::is_busy);

    // Manual selection through the file dialog
    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| files_of(&list)).unwrap_or_default();
        widget.update(|w| {
            w.select(files);
        });
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        widget.update(UploadWidget::drag_over);
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        widget.update(UploadWidget::drag_leave);
    };

    // Dropped files go into the same input as a manual selection
    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let list = ev.data_transfer().and_then(|dt| dt.files());
        let files = list.as_ref().map(files_of).unwrap_or_default();

        let accepted = widget.try_update(|w| w.drop_files(files)).unwrap_or(false);
        if accepted {
            if let (Some(input), Some(list)) = (input_ref.get_untracked(), list.as_ref()) {
                input.set_files(Some(list));
            }
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let cfg = config.get_value();

        let Some(ticket) = widget.try_update(|w| w.begin_submit(cfg.max_file_size)).flatten() else {
            return;
        };

        spawn_local(async move {
            let attempt = ticket.attempt;
            let on_progress: ProgressCallback = Rc::new(move |progress: UploadProgress| {
                widget.try_update(|w| w.record_progress(attempt, progress));
            });

            let result = upload_reports(
                &XhrTransport,
                &cfg.upload_url(),
                UPLOAD_FIELD,
                &ticket.files,
                on_progress,
            )
            .await;

            let reset_form = widget.try_update(|w| w.complete(attempt, result)).unwrap_or(false);
            if reset_form {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }

            TimeoutFuture::new(cfg.progress_hide_delay_ms).await;
            widget.try_update(|w| w.hide_progress(attempt));
        });
    };

    let selected_files = move || {
        widget.with(|w| {
            w.selection()
                .iter()
                .map(|f| (f.file_name(), format_size(f.file_size())))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class=move || if widget.with(UploadWidget::drag_active) { "container drag-over" } else { "container" }
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <form id="uploadForm" node_ref=form_ref on:submit=on_submit>
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">"Drop PDF reports here"</div>
                <div class="upload-hint">"or choose files below (PDF only, max 200 MB each)"</div>

                <input
                    type="file"
                    id="fileInput"
                    name="files"
                    accept=".pdf,application/pdf"
                    multiple=true
                    node_ref=input_ref
                    disabled=busy
                    on:change=on_file_change
                />

                <ul class="selected-files">
                    {move || {
                        selected_files()
                            .into_iter()
                            .map(|(name, size)| view! {
                                <li>{name} <span class="file-size">" (" {size} ")"</span></li>
                            })
                            .collect_view()
                    }}
                </ul>

                <button type="submit" id="uploadButton" class="upload-button" disabled=busy>
                    {move || widget.with(UploadWidget::button_label)}
                </button>
            </form>

            <ProgressBar progress=Signal::derive(move || widget.with(UploadWidget::progress))/>
            <FeedbackMessage feedback=Signal::derive(move || widget.with(|w| w.feedback().cloned()))/>
        </div>

        <LogsPanel
            logs=Signal::derive(move || widget.with(|w| w.activity().to_vec()))
            on_clear=Callback::new(move |_| widget.update(UploadWidget::clear_activity))
        />
    }
}
