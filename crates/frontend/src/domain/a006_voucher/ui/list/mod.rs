use contracts::domain::a006_voucher::{Voucher, VoucherStatus};
use contracts::domain::common::format_rupees;
use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::amount_words::rupees_in_words;
use crate::shared::api_utils::{self, FetchTicket};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::stage_tabs::StageTabs;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::open_print_document;
use crate::shared::icons::icon;
use crate::shared::list_state::{apply_rows, apply_search, FieldAccess, FilteredList, PagedView};
use crate::system::auth::guard::Can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &["voucherNo", "account", "narration", "branch.name", "createdBy"];

#[derive(Clone, Debug)]
pub struct VoucherRow {
    pub id: Uuid,
    pub voucher_no: String,
    pub kind: String,
    pub account: String,
    pub narration: String,
    pub amount: i64,
    pub branch_name: String,
    pub status: VoucherStatus,
    pub created_by: String,
    pub created_at: String,
}

impl From<Voucher> for VoucherRow {
    fn from(v: Voucher) -> Self {
        Self {
            id: v.id,
            voucher_no: v.voucher_no,
            kind: v.kind.as_str().to_string(),
            account: v.account,
            narration: v.narration,
            amount: v.amount,
            branch_name: v.branch.name,
            status: v.status,
            created_by: v.created_by,
            created_at: v.created_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for VoucherRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "voucherNo" => Some(self.voucher_no.clone()),
            "account" => Some(self.account.clone()),
            "narration" => Some(self.narration.clone()),
            "branch.name" => Some(self.branch_name.clone()),
            "createdBy" => Some(self.created_by.clone()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
struct Stage {
    status: VoucherStatus,
    list: RwSignal<FilteredList<VoucherRow>>,
    pager: RwSignal<PagedView>,
    ticket: FetchTicket,
}

impl Stage {
    fn new(status: VoucherStatus) -> Self {
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
            match fetch_vouchers(self.status).await {
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
                    log::error!("voucher fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    }
}

fn status_code(status: VoucherStatus) -> &'static str {
    match status {
        VoucherStatus::Pending => "PENDING",
        VoucherStatus::Approved => "APPROVED",
        VoucherStatus::Rejected => "REJECTED",
    }
}

fn status_tone(status: VoucherStatus) -> &'static str {
    match status {
        VoucherStatus::Pending => "pending",
        VoucherStatus::Approved => "ok",
        VoucherStatus::Rejected => "rejected",
    }
}

fn voucher_html(row: &VoucherRow) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{kind} Voucher {voucher_no}</title>
<style>
  body {{ font-family: Georgia, serif; margin: 40px; color: #222; }}
  .voucher {{ max-width: 700px; margin: 0 auto; border: 1px solid #888; padding: 32px; }}
  h1 {{ font-size: 18px; text-align: center; }}
  table {{ width: 100%; border-collapse: collapse; margin-top: 24px; }}
  td {{ padding: 6px 4px; }}
  td.label {{ width: 35%; color: #555; }}
  .words {{ font-style: italic; }}
</style>
</head>
<body>
<div class="voucher">
  <h1>{branch} — {kind} Voucher</h1>
  <table>
    <tr><td class="label">Voucher No</td><td>{voucher_no}</td></tr>
    <tr><td class="label">Date</td><td>{date}</td></tr>
    <tr><td class="label">Account</td><td>{account}</td></tr>
    <tr><td class="label">Narration</td><td>{narration}</td></tr>
    <tr><td class="label">Amount</td><td>Rs. {amount}</td></tr>
    <tr><td class="label">In words</td><td class="words">{words}</td></tr>
    <tr><td class="label">Prepared by</td><td>{created_by}</td></tr>
  </table>
</div>
</body>
</html>"#,
        kind = row.kind,
        voucher_no = row.voucher_no,
        branch = row.branch_name,
        date = format_date(&row.created_at),
        account = row.account,
        narration = row.narration,
        amount = format_rupees(row.amount),
        words = rupees_in_words(row.amount),
        created_by = row.created_by,
    )
}

#[component]
#[allow(non_snake_case)]
pub fn VoucherList() -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let active = RwSignal::new(0usize);

    let stages = [
        Stage::new(VoucherStatus::Pending),
        Stage::new(VoucherStatus::Approved),
        Stage::new(VoucherStatus::Rejected),
    ];

    let fetch_all = move || {
        for stage in stages {
            stage.fetch(set_error);
        }
    };

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

    // Approve and reject both leave Pending; re-fetch the source and
    // destination stages from the server rather than splicing in memory.
    let transition = move |id: Uuid, verb: &'static str, target: usize| {
        spawn_local(async move {
            match api_utils::post_empty(&format!("/api/voucher/{}/{}", id, verb)).await {
                Ok(()) => {
                    stages[0].fetch(set_error);
                    stages[target].fetch(set_error);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("{} failed: {}", verb, e)));
                }
            }
        });
    };

    let print_voucher = move |row: VoucherRow| {
        if let Err(e) = open_print_document(&voucher_html(&row)) {
            let _ = set_error.try_set(Some(e));
        }
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
                <h2>"Vouchers"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <StageTabs
                labels=vec!["Pending Approval", "Approved", "Rejected"]
                counts=counts
                active=active
                on_select=Callback::new(move |i| active.set(i))
            />

            <div class="list-toolbar">
                <SearchBox
                    value=search_term
                    on_input=on_search
                    placeholder="Search vouchers..."
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
                            <th class="table__header-cell">"Voucher No"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell">"Narration"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Branch"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let row_for_print = row.clone();
                            let id = row.id;
                            let status = row.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.voucher_no.clone()}</td>
                                    <td class="table__cell">{row.kind.clone()}</td>
                                    <td class="table__cell">{row.account.clone()}</td>
                                    <td class="table__cell">{row.narration.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_rupees(row.amount)}</td>
                                    <td class="table__cell">{row.branch_name.clone()}</td>
                                    <td class="table__cell">
                                        <StatusBadge label=status.as_str() tone=status_tone(status) />
                                    </td>
                                    <td class="table__cell">{format_datetime(&row.created_at)}</td>
                                    <td class="table__cell table__cell--actions">
                                        {match status {
                                            VoucherStatus::Pending => view! {
                                                <Can module=modules::VOUCHER action=actions::APPROVE>
                                                    <button class="button button--small" title="Approve"
                                                        on:click=move |_| transition(id, "approve", 1)>
                                                        {icon("check")}
                                                    </button>
                                                    <button class="button button--small button--danger" title="Reject"
                                                        on:click=move |_| transition(id, "reject", 2)>
                                                        {icon("x")}
                                                    </button>
                                                </Can>
                                            }.into_any(),
                                            VoucherStatus::Approved => {
                                                let row = row_for_print.clone();
                                                view! {
                                                    <button class="button button--small" title="Print voucher"
                                                        on:click=move |_| print_voucher(row.clone())>
                                                        {icon("printer")}
                                                    </button>
                                                }.into_any()
                                            }
                                            VoucherStatus::Rejected => view! { <span></span> }.into_any(),
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_vouchers(status: VoucherStatus) -> Result<Vec<Voucher>, String> {
    api_utils::get_json(&format!(
        "/api/voucher?status={}",
        urlencoding::encode(status_code(status))
    ))
    .await
}
