use leptos::prelude::*;

use loradeck_core::{paths, DragPayload, ModelRecord};

const NO_DESCRIPTION: &str = "No description";

#[component]
pub fn ModelCard(record: ModelRecord) -> impl IntoView {
    let (thumbnail, set_thumbnail) = signal(paths::thumbnail(&record.internal_name));

    // Swap to the default image once; the same-value guard keeps a missing
    // default from retriggering the error handler forever.
    let on_thumbnail_error = move |_| {
        if thumbnail.get_untracked() != paths::DEFAULT_THUMBNAIL {
            set_thumbnail.set(paths::DEFAULT_THUMBNAIL.to_string());
        }
    };

    let drag_name = record.internal_name.clone();
    let on_drag_start = move |ev: web_sys::DragEvent| {
        let Some(data_transfer) = ev.data_transfer() else {
            return;
        };
        if let Ok(json) = DragPayload::new(&drag_name).to_json() {
            let _ = data_transfer.set_data("text/plain", &json);
        }
    };

    let description = if record.has_description() {
        record.description.clone()
    } else {
        NO_DESCRIPTION.to_string()
    };

    view! {
        <div
            class="model-card"
            draggable="true"
            data-model-name=record.internal_name.clone()
            on:dragstart=on_drag_start
        >
            <img
                class="thumbnail"
                src=move || thumbnail.get()
                alt=record.display_name.clone()
                on:error=on_thumbnail_error
            />
            <div class="info-panel">
                <h3>{record.display_name.clone()}</h3>
                <p class="description">{description}</p>
                <div class="tag-container">
                    {record
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="model-tag">{tag.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
