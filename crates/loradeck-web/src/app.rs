use leptos::prelude::*;

use loradeck_core::Catalog;

use crate::api;
use crate::components::model_card::ModelCard;
use crate::components::search_bar::SearchBar;
use crate::plugin::HostApp;

#[component]
pub fn ManagerPanel(host: HostApp) -> impl IntoView {
    // Retained per the host contract; nothing reads it yet.
    let _host = StoredValue::new_local(host);

    let catalog = RwSignal::new(Catalog::new());

    // Single load at mount. A failed fetch logs and leaves the catalog
    // empty; the panel stays usable.
    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_models().await {
                Ok(records) => catalog.update(|c| c.load(records)),
                Err(e) => web_sys::console::error_1(
                    &format!("[loradeck] model list load failed: {e}").into(),
                ),
            }
        });
    });

    let on_search = Callback::new(move |text: String| {
        catalog.update(|c| c.set_query(&text));
    });

    view! {
        <div class="lora-manager">
            <SearchBar on_input=on_search />
            <div class="model-grid">
                {move || {
                    catalog.with(|c| {
                        c.filtered()
                            .into_iter()
                            .cloned()
                            .map(|record| view! { <ModelCard record=record /> })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
