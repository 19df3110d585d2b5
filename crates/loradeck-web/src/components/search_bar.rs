use leptos::prelude::*;

#[component]
pub fn SearchBar(#[prop(into)] on_input: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search models (name/tags)"
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
