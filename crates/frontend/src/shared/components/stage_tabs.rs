use leptos::prelude::*;

/// Tab strip for multi-stage workflow screens (Pending / Approved / ...).
///
/// Each tab shows its stage's record count; the active index selects which
/// stage's dataset the table below renders.
#[component]
pub fn StageTabs(
    /// Stage labels, in display order
    labels: Vec<&'static str>,

    /// Record count per stage, same order as `labels`
    #[prop(into)]
    counts: Signal<Vec<usize>>,

    #[prop(into)] active: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="stage-tabs">
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <button
                            class="stage-tab"
                            class:stage-tab--active=move || active.get() == i
                            on:click=move |_| on_select.run(i)
                        >
                            {label}
                            <span class="stage-tab__count">
                                {move || counts.get().get(i).copied().unwrap_or(0)}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
