use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search input applied on every keystroke; filtering is cheap enough for
/// the bounded lists these screens show.
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-box">
            {icon("search")}
            <input
                type="text"
                class="search-box__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
