use leptos::prelude::*;

/// Colored status chip. `tone` picks the badge modifier class:
/// "pending" (amber), "ok" (green), "rejected" (red), anything else neutral.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, #[prop(into)] tone: String) -> impl IntoView {
    let class = match tone.as_str() {
        "pending" => "badge badge--pending",
        "ok" => "badge badge--ok",
        "rejected" => "badge badge--rejected",
        _ => "badge",
    };

    view! { <span class=class>{label}</span> }
}
