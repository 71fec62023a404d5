//! Result and error message box.

use leptos::*;
use crate::state::Feedback;

#[component]
pub fn FeedbackMessage(
    #[prop(into)]
    feedback: Signal<Option<Feedback>>,
) -> impl IntoView {
    move || {
        feedback.get().map(|fb| {
            view! {
                <div class=fb.kind.css_class() id="message">
                    <strong>{fb.headline}</strong>
                    <ul class="message-lines">
                        {fb.lines
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
    }
}
