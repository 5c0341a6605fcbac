pub mod receipt;

use contracts::domain::a004_booking::{AllocateRequest, Booking, BookingStatus};
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
use crate::shared::export::open_print_document;
use crate::shared::icons::icon;
use crate::shared::list_state::{apply_rows, apply_search, FieldAccess, FilteredList, PagedView};
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::guard::use_can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &[
    "bookingNo",
    "customer.name",
    "customer.phone",
    "model",
    "branch.name",
    "chassisNo",
];

#[derive(Clone, Debug)]
pub struct BookingRow {
    pub id: Uuid,
    pub booking_no: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub model: String,
    pub variant: String,
    pub branch_name: String,
    pub broker_name: String,
    pub amount: i64,
    pub status: BookingStatus,
    pub chassis_no: String,
    pub created_at: String,
}

impl From<Booking> for BookingRow {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            booking_no: b.booking_no,
            customer_name: b.customer.name,
            customer_phone: b.customer.phone,
            model: b.model,
            variant: b.variant,
            branch_name: b.branch.name,
            broker_name: b.broker_name.unwrap_or_else(|| "-".to_string()),
            amount: b.amount,
            status: b.status,
            chassis_no: b.chassis_no.unwrap_or_default(),
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for BookingRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "bookingNo" => Some(self.booking_no.clone()),
            "customer.name" => Some(self.customer_name.clone()),
            "customer.phone" => Some(self.customer_phone.clone()),
            "model" => Some(self.model.clone()),
            "branch.name" => Some(self.branch_name.clone()),
            "chassisNo" => Some(self.chassis_no.clone()),
            _ => None,
        }
    }
}

/// One stage tab: its own dataset, pager and in-flight fetch ticket.
#[derive(Clone, Copy)]
struct Stage {
    status: BookingStatus,
    list: RwSignal<FilteredList<BookingRow>>,
    pager: RwSignal<PagedView>,
    ticket: FetchTicket,
}

impl Stage {
    fn new(status: BookingStatus) -> Self {
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
            match fetch_bookings(self.status).await {
                Ok(items) if self.ticket.is_current(ticket) => {
                    apply_rows(
                        self.list,
                        self.pager,
                        items.into_iter().map(Into::into).collect(),
                    );
                    let _ = set_error.try_set(None);
                }
                Ok(_) => {} // superseded by a newer fetch
                Err(e) => {
                    log::error!("booking fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    }
}

fn status_code(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "PENDING",
        BookingStatus::Approved => "APPROVED",
        BookingStatus::Allocated => "ALLOCATED",
    }
}

fn status_tone(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Approved | BookingStatus::Allocated => "ok",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BookingList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let (error, set_error) = signal::<Option<String>>(None);
    let active = RwSignal::new(0usize);

    let stages = [
        Stage::new(BookingStatus::Pending),
        Stage::new(BookingStatus::Approved),
        Stage::new(BookingStatus::Allocated),
    ];

    let fetch_all = move || {
        for stage in stages {
            stage.fetch(set_error);
        }
    };

    let can_approve = use_can(modules::BOOKING, actions::APPROVE);
    let can_allocate = use_can(modules::BOOKING, actions::ALLOCATE);
    let can_delete = use_can(modules::BOOKING, actions::DELETE);
    // Action column convention: visible when any row action is permitted.
    let show_actions = Signal::derive(move || {
        can_approve.get() || can_allocate.get() || can_delete.get()
    });

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

    let approve = move |id: Uuid| {
        spawn_local(async move {
            match api_utils::post_empty(&format!("/api/booking/{}/approve", id)).await {
                Ok(()) => {
                    // Re-fetch both affected stages instead of moving the
                    // record in memory; server truth wins.
                    stages[0].fetch(set_error);
                    stages[1].fetch(set_error);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Approve failed: {}", e)));
                }
            }
        });
    };

    let delete_booking = move |id: Uuid| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this booking?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api_utils::delete(&format!("/api/booking/{}", id)).await {
                Ok(()) => stages[0].fetch(set_error),
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Delete failed: {}", e)));
                }
            }
        });
    };

    let open_allocate_modal = move |row: BookingRow| {
        let booking_no = row.booking_no.clone();
        let id = row.id;
        modal_stack.push_with_style(
            Some("max-width: 420px; width: 420px;".to_string()),
            move |handle| {
                let (chassis, set_chassis) = signal(String::new());
                let (modal_error, set_modal_error) = signal::<Option<String>>(None);
                let handle_confirm = handle.clone();
                let booking_no = booking_no.clone();

                let confirm = move |_| {
                    let chassis_no = chassis.get().trim().to_string();
                    if chassis_no.is_empty() {
                        set_modal_error.set(Some("Chassis number is required".to_string()));
                        return;
                    }
                    let handle = handle_confirm.clone();
                    spawn_local(async move {
                        let body = AllocateRequest { chassis_no };
                        match api_utils::post_json(&format!("/api/booking/{}/allocate", id), &body)
                            .await
                        {
                            Ok(()) => {
                                handle.close();
                                stages[1].fetch(set_error);
                                stages[2].fetch(set_error);
                            }
                            Err(e) => {
                                let _ = set_modal_error
                                    .try_set(Some(format!("Allocate failed: {}", e)));
                            }
                        }
                    });
                };

                let handle_cancel = handle.clone();
                view! {
                    <div class="modal-body">
                        <h3>{format!("Allocate vehicle — {}", booking_no)}</h3>
                        {move || modal_error.get().map(|e| view! { <div class="error">{e}</div> })}
                        <div class="form-group">
                            <label>"Chassis number"</label>
                            <input
                                type="text"
                                prop:value=move || chassis.get()
                                on:input=move |ev| set_chassis.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-actions">
                            <button class="button button--primary" on:click=confirm>
                                "Allocate"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| handle_cancel.close()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            },
        );
    };

    let print_receipt = move |row: BookingRow| {
        if let Err(e) = open_print_document(&receipt::receipt_html(&row)) {
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
                <h2>"Bookings"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <StageTabs
                labels=vec!["Pending Approval", "Approved", "Allocated"]
                counts=counts
                active=active
                on_select=Callback::new(move |i| active.set(i))
            />

            <div class="list-toolbar">
                <SearchBox
                    value=search_term
                    on_input=on_search
                    placeholder="Search bookings..."
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
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Vehicle"</th>
                            <th class="table__header-cell">"Branch"</th>
                            <th class="table__header-cell">"Broker"</th>
                            <th class="table__header-cell">"Advance"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Created"</th>
                            <Show when=move || show_actions.get()>
                                <th class="table__header-cell">"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let row_for_allocate = row.clone();
                            let row_for_print = row.clone();
                            let id = row.id;
                            let status = row.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.booking_no.clone()}</td>
                                    <td class="table__cell">{row.customer_name.clone()}</td>
                                    <td class="table__cell">{row.customer_phone.clone()}</td>
                                    <td class="table__cell">{format!("{} {}", row.model, row.variant)}</td>
                                    <td class="table__cell">{row.branch_name.clone()}</td>
                                    <td class="table__cell">{row.broker_name.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_rupees(row.amount)}</td>
                                    <td class="table__cell">
                                        <StatusBadge label=status.as_str() tone=status_tone(status) />
                                    </td>
                                    <td class="table__cell">{format_datetime(&row.created_at)}</td>
                                    <Show when=move || show_actions.get()>
                                        <td class="table__cell table__cell--actions">
                                            {match status {
                                                BookingStatus::Pending => view! {
                                                    <Show when=move || can_approve.get()>
                                                        <button class="button button--small" title="Approve"
                                                            on:click=move |_| approve(id)>
                                                            {icon("check")}
                                                        </button>
                                                    </Show>
                                                    <Show when=move || can_delete.get()>
                                                        <button class="button button--small button--danger" title="Delete"
                                                            on:click=move |_| delete_booking(id)>
                                                            {icon("delete")}
                                                        </button>
                                                    </Show>
                                                }.into_any(),
                                                BookingStatus::Approved => {
                                                    let row = row_for_allocate.clone();
                                                    view! {
                                                        <Show when=move || can_allocate.get()>
                                                            {
                                                                let row = row.clone();
                                                                view! {
                                                                    <button class="button button--small" title="Allocate vehicle"
                                                                        on:click=move |_| open_allocate_modal(row.clone())>
                                                                        {icon("stock")}
                                                                    </button>
                                                                }
                                                            }
                                                        </Show>
                                                    }.into_any()
                                                }
                                                BookingStatus::Allocated => {
                                                    let row = row_for_print.clone();
                                                    view! {
                                                        <button class="button button--small" title="Print receipt"
                                                            on:click=move |_| print_receipt(row.clone())>
                                                            {icon("printer")}
                                                        </button>
                                                    }.into_any()
                                                }
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

async fn fetch_bookings(status: BookingStatus) -> Result<Vec<Booking>, String> {
    api_utils::get_json(&format!(
        "/api/booking?status={}",
        urlencoding::encode(status_code(status))
    ))
    .await
}
