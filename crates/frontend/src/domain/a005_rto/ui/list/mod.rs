use contracts::domain::a005_rto::{RtoApplication, RtoStatus};
use contracts::domain::common::format_rupees;
use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{self, FetchTicket};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::stage_tabs::StageTabs;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_state::{apply_rows, apply_search, FieldAccess, FilteredList, PagedView};
use crate::system::auth::guard::use_can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &["bookingNo", "customer.name", "chassisNo", "model"];

#[derive(Clone, Debug)]
pub struct RtoRow {
    pub id: Uuid,
    pub booking_no: String,
    pub customer_name: String,
    pub chassis_no: String,
    pub model: String,
    pub fees: i64,
    pub status: RtoStatus,
    pub applied_at: String,
    pub created_at: String,
}

impl From<RtoApplication> for RtoRow {
    fn from(r: RtoApplication) -> Self {
        Self {
            id: r.id,
            booking_no: r.booking_no,
            customer_name: r.customer.name,
            chassis_no: r.chassis_no,
            model: r.model,
            fees: r.fees,
            status: r.status,
            applied_at: r.applied_at.map(|d| d.to_rfc3339()).unwrap_or_default(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for RtoRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "bookingNo" => Some(self.booking_no.clone()),
            "customer.name" => Some(self.customer_name.clone()),
            "chassisNo" => Some(self.chassis_no.clone()),
            "model" => Some(self.model.clone()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
struct Stage {
    status: RtoStatus,
    list: RwSignal<FilteredList<RtoRow>>,
    pager: RwSignal<PagedView>,
    ticket: FetchTicket,
}

impl Stage {
    fn new(status: RtoStatus) -> Self {
        Self {
            status,
            list: RwSignal::new(FilteredList::new(SEARCH_FIELDS)),
            pager: RwSignal::new(PagedView::new(PAGE_SIZE)),
            ticket: FetchTicket::new(),
        }
    }

    fn fetch(self, set_error: WriteSignal<Option<String>>) {
        let ticket = self.ticket.begin();
        spawn_local(async move {
            match fetch_applications(self.status).await {
                Ok(items) if self.ticket.is_current(ticket) => {
                    apply_rows(
                        self.list,
                        self.pager,
                        items.into_iter().map(Into::into).collect(),
                    );
                    let _ = set_error.try_set(None);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("rto fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    }
}

fn status_code(status: RtoStatus) -> &'static str {
    match status {
        RtoStatus::Pending => "PENDING",
        RtoStatus::Applied => "APPLIED",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RtoList() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let active = RwSignal::new(0usize);

    let stages = [Stage::new(RtoStatus::Pending), Stage::new(RtoStatus::Applied)];

    let fetch_all = move || {
        for stage in stages {
            stage.fetch(set_error);
        }
    };

    let can_apply = use_can(modules::RTO, actions::APPLY);

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

    let mark_applied = move |id: Uuid| {
        spawn_local(async move {
            match api_utils::post_empty(&format!("/api/rto/{}/apply", id)).await {
                Ok(()) => {
                    stages[0].fetch(set_error);
                    stages[1].fetch(set_error);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Apply failed: {}", e)));
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
                <h2>"RTO Applications"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <StageTabs
                labels=vec!["Pending", "Applied"]
                counts=counts
                active=active
                on_select=Callback::new(move |i| active.set(i))
            />

            <div class="list-toolbar">
                <SearchBox
                    value=search_term
                    on_input=on_search
                    placeholder="Search applications..."
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
                            <th class="table__header-cell">"Booking No"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Chassis No"</th>
                            <th class="table__header-cell">"Model"</th>
                            <th class="table__header-cell">"Fees"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Applied"</th>
                            <Show when=move || can_apply.get()>
                                <th class="table__header-cell">"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let id = row.id;
                            let status = row.status;
                            let applied = if row.applied_at.is_empty() {
                                "-".to_string()
                            } else {
                                format_datetime(&row.applied_at)
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.booking_no.clone()}</td>
                                    <td class="table__cell">{row.customer_name.clone()}</td>
                                    <td class="table__cell">{row.chassis_no.clone()}</td>
                                    <td class="table__cell">{row.model.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_rupees(row.fees)}</td>
                                    <td class="table__cell">
                                        <StatusBadge
                                            label=status.as_str()
                                            tone=if status == RtoStatus::Applied { "ok" } else { "pending" }
                                        />
                                    </td>
                                    <td class="table__cell">{applied}</td>
                                    <Show when=move || can_apply.get()>
                                        <td class="table__cell table__cell--actions">
                                            {if status == RtoStatus::Pending {
                                                view! {
                                                    <button class="button button--small" title="Mark applied"
                                                        on:click=move |_| mark_applied(id)>
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

async fn fetch_applications(status: RtoStatus) -> Result<Vec<RtoApplication>, String> {
    api_utils::get_json(&format!(
        "/api/rto?status={}",
        urlencoding::encode(status_code(status))
    ))
    .await
}
