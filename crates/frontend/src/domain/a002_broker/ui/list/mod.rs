use contracts::domain::a002_broker::{Broker, LedgerEntry};
use contracts::domain::common::format_rupees;
use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{self, FetchTicket};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::{export_csv, CsvExport};
use crate::shared::icons::icon;
use crate::shared::list_state::{apply_rows, apply_search, FieldAccess, FilteredList, PagedView};
use crate::system::auth::guard::use_can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &["name", "phone", "kind", "branch.name"];

#[derive(Clone, Debug)]
pub struct BrokerRow {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub kind: String,
    pub branch_name: String,
    pub commission_per_vehicle: i64,
    pub created_at: String,
}

impl From<Broker> for BrokerRow {
    fn from(b: Broker) -> Self {
        Self {
            id: b.id,
            name: b.name,
            phone: b.phone,
            kind: b.kind.as_str().to_string(),
            branch_name: b.branch.name,
            commission_per_vehicle: b.commission_per_vehicle,
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for BrokerRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "name" => Some(self.name.clone()),
            "phone" => Some(self.phone.clone()),
            "kind" => Some(self.kind.clone()),
            "branch.name" => Some(self.branch_name.clone()),
            _ => None,
        }
    }
}

struct LedgerCsvRow {
    broker_name: String,
    entry: LedgerEntry,
}

impl CsvExport for LedgerCsvRow {
    fn headers() -> Vec<&'static str> {
        vec!["Broker", "Date", "Narration", "Debit", "Credit", "Balance"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.broker_name.clone(),
            format_datetime(&self.entry.entry_date.to_rfc3339()),
            self.entry.narration.clone(),
            format_rupees(self.entry.debit),
            format_rupees(self.entry.credit),
            format_rupees(self.entry.balance),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BrokerList() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let list = RwSignal::new(FilteredList::<BrokerRow>::new(SEARCH_FIELDS));
    let pager = RwSignal::new(PagedView::new(PAGE_SIZE));
    let ticket = FetchTicket::new();

    let fetch_all = move || {
        let t = ticket.begin();
        spawn_local(async move {
            match fetch_brokers().await {
                Ok(items) if ticket.is_current(t) => {
                    let rows = items.into_iter().map(BrokerRow::from).collect();
                    apply_rows(list, pager, rows);
                    let _ = set_error.try_set(None);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("broker fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    let can_export_ledger = use_can(modules::BROKER_LEDGER, actions::READ);

    let search_term = Signal::derive(move || list.with(|l| l.term().to_string()));
    let on_search = Callback::new(move |term: String| apply_search(list, pager, &term));

    let current_page = Signal::derive(move || pager.get().current_page());
    let total_count = Signal::derive(move || list.with(|l| l.filtered().len()));
    let total_pages =
        Signal::derive(move || pager.get().last_page(list.with(|l| l.filtered().len())));
    let on_page_change = Callback::new(move |page: usize| {
        let len = list.with_untracked(|l| l.filtered().len());
        pager.update(|p| p.go_to_page(page, len));
    });

    let export_ledger = move |id: Uuid, name: String| {
        spawn_local(async move {
            match fetch_ledger(id).await {
                Ok(entries) => {
                    let rows: Vec<LedgerCsvRow> = entries
                        .into_iter()
                        .map(|entry| LedgerCsvRow {
                            broker_name: name.clone(),
                            entry,
                        })
                        .collect();
                    let filename = format!("ledger_{}.csv", name.replace(' ', "_"));
                    if let Err(e) = export_csv(&rows, &filename) {
                        let _ = set_error.try_set(Some(e));
                    }
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Ledger fetch failed: {}", e)));
                }
            }
        });
    };

    let page_rows = move || {
        let p = pager.get();
        list.with(|l| p.page_slice(l.filtered()).to_vec())
    };

    fetch_all();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Brokers"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="list-toolbar">
                <SearchBox
                    value=search_term
                    on_input=on_search
                    placeholder="Search by name, phone, branch..."
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Branch"</th>
                            <th class="table__header-cell">"Commission / Vehicle"</th>
                            <th class="table__header-cell">"Since"</th>
                            <Show when=move || can_export_ledger.get()>
                                <th class="table__header-cell">"Ledger"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let id = row.id;
                            let name = row.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{row.phone.clone()}</td>
                                    <td class="table__cell">{row.kind.clone()}</td>
                                    <td class="table__cell">{row.branch_name.clone()}</td>
                                    <td class="table__cell">{format_rupees(row.commission_per_vehicle)}</td>
                                    <td class="table__cell">{format_date(&row.created_at)}</td>
                                    <Show when=move || can_export_ledger.get()>
                                        <td class="table__cell table__cell--actions">
                                            {
                                                let name = name.clone();
                                                view! {
                                                    <button class="button button--small" title="Export ledger CSV"
                                                        on:click=move |_| export_ledger(id, name.clone())>
                                                        {icon("download")}
                                                    </button>
                                                }
                                            }
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

async fn fetch_brokers() -> Result<Vec<Broker>, String> {
    api_utils::get_json("/api/broker").await
}

async fn fetch_ledger(id: Uuid) -> Result<Vec<LedgerEntry>, String> {
    api_utils::get_json(&format!("/api/broker/{}/ledger", id)).await
}
