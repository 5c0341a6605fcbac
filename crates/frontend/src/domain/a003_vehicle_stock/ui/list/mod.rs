use contracts::domain::a003_vehicle_stock::{StockStatus, VehicleStock};
use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{self, FetchTicket};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::stage_tabs::StageTabs;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{apply_rows, apply_search, FieldAccess, FilteredList, PagedView};
use crate::system::auth::guard::use_can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &["chassisNo", "engineNo", "model", "color", "branch.name"];

#[derive(Clone, Debug)]
pub struct StockRow {
    pub id: Uuid,
    pub chassis_no: String,
    pub engine_no: String,
    pub model: String,
    pub variant: String,
    pub color: String,
    pub branch_name: String,
    pub status: StockStatus,
    pub received_at: String,
}

impl From<VehicleStock> for StockRow {
    fn from(v: VehicleStock) -> Self {
        Self {
            id: v.id,
            chassis_no: v.chassis_no,
            engine_no: v.engine_no,
            model: v.model,
            variant: v.variant,
            color: v.color,
            branch_name: v.branch.name,
            status: v.status,
            received_at: v.received_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for StockRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "chassisNo" => Some(self.chassis_no.clone()),
            "engineNo" => Some(self.engine_no.clone()),
            "model" => Some(self.model.clone()),
            "color" => Some(self.color.clone()),
            "branch.name" => Some(self.branch_name.clone()),
            _ => None,
        }
    }
}

/// Stage tab backed by a client-side partition of one stock fetch.
#[derive(Clone, Copy)]
struct Stage {
    list: RwSignal<FilteredList<StockRow>>,
    pager: RwSignal<PagedView>,
}

impl Stage {
    fn new() -> Self {
        Self {
            list: RwSignal::new(FilteredList::new(SEARCH_FIELDS)),
            pager: RwSignal::new(PagedView::new(PAGE_SIZE)),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VehicleStockList() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let active = RwSignal::new(0usize);
    let ticket = FetchTicket::new();

    // One fetch, partitioned by status into the two stage tabs.
    let stages = [Stage::new(), Stage::new()];

    let fetch_all = move || {
        let t = ticket.begin();
        spawn_local(async move {
            match fetch_stock().await {
                Ok(items) if ticket.is_current(t) => {
                    let mut pending: Vec<StockRow> = Vec::new();
                    let mut in_stock: Vec<StockRow> = Vec::new();
                    for item in items {
                        let row = StockRow::from(item);
                        match row.status {
                            StockStatus::PendingVerification => pending.push(row),
                            StockStatus::InStock => in_stock.push(row),
                            // Allocated vehicles have left the stock screens.
                            StockStatus::Allocated => {}
                        }
                    }
                    apply_rows(stages[0].list, stages[0].pager, pending);
                    apply_rows(stages[1].list, stages[1].pager, in_stock);
                    let _ = set_error.try_set(None);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("stock fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    let can_verify = use_can(modules::STOCK, actions::VERIFY);

    let active_stage = move || stages[active.get()];

    let counts = Signal::derive(move || {
        stages
            .iter()
            .map(|s| s.list.with(|l| l.full_len()))
            .collect::<Vec<_>>()
    });

    let search_term =
        Signal::derive(move || active_stage().list.with(|l| l.term().to_string()));
    let on_search = Callback::new(move |term: String| {
        let stage = stages[active.get_untracked()];
        apply_search(stage.list, stage.pager, &term);
    });

    let current_page = Signal::derive(move || active_stage().pager.get().current_page());
    let total_count = Signal::derive(move || active_stage().list.with(|l| l.filtered().len()));
    let total_pages = Signal::derive(move || {
        let stage = active_stage();
        stage.pager.get().last_page(stage.list.with(|l| l.filtered().len()))
    });
    let on_page_change = Callback::new(move |page: usize| {
        let stage = stages[active.get_untracked()];
        let len = stage.list.with_untracked(|l| l.filtered().len());
        stage.pager.update(|p| p.go_to_page(page, len));
    });

    let verify = move |id: Uuid| {
        spawn_local(async move {
            match api_utils::post_empty(&format!("/api/stock/{}/verify", id)).await {
                Ok(()) => fetch_all(),
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Verify failed: {}", e)));
                }
            }
        });
    };

    let page_rows = move || {
        let stage = active_stage();
        let pager = stage.pager.get();
        stage.list.with(|l| pager.page_slice(l.filtered()).to_vec())
    };

    fetch_all();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Vehicle Stock"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <StageTabs
                labels=vec!["Pending Verification", "In Stock"]
                counts=counts
                active=active
                on_select=Callback::new(move |i| active.set(i))
            />

            <div class="list-toolbar">
                <SearchBox
                    value=search_term
                    on_input=on_search
                    placeholder="Search by chassis, engine, model..."
                />
                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    total_count=total_count
                    on_page_change=on_page_change
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Chassis No"</th>
                            <th class="table__header-cell">"Engine No"</th>
                            <th class="table__header-cell">"Model"</th>
                            <th class="table__header-cell">"Color"</th>
                            <th class="table__header-cell">"Branch"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Received"</th>
                            <Show when=move || can_verify.get()>
                                <th class="table__header-cell">"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let id = row.id;
                            let status = row.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.chassis_no.clone()}</td>
                                    <td class="table__cell">{row.engine_no.clone()}</td>
                                    <td class="table__cell">{format!("{} {}", row.model, row.variant)}</td>
                                    <td class="table__cell">{row.color.clone()}</td>
                                    <td class="table__cell">{row.branch_name.clone()}</td>
                                    <td class="table__cell">
                                        <StatusBadge
                                            label=status.as_str()
                                            tone=if status == StockStatus::InStock { "ok" } else { "pending" }
                                        />
                                    </td>
                                    <td class="table__cell">{format_date(&row.received_at)}</td>
                                    <Show when=move || can_verify.get()>
                                        <td class="table__cell table__cell--actions">
                                            {if status == StockStatus::PendingVerification {
                                                view! {
                                                    <button class="button button--small" title="Verify"
                                                        on:click=move |_| verify(id)>
                                                        {icon("check")}
                                                    </button>
                                                }.into_any()
                                            } else {
                                                view! { <span></span> }.into_any()
                                            }}
                                        </td>
                                    </Show>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_stock() -> Result<Vec<VehicleStock>, String> {
    api_utils::get_json("/api/stock").await
}
