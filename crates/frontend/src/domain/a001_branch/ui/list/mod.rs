use std::cmp::Ordering;

use contracts::domain::a001_branch::{Branch, BranchUpsertRequest};
use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{self, FetchTicket};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{
    apply_rows, apply_search, sort_indicator, sort_list, FieldAccess, FilteredList, PagedView,
    Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::guard::use_can;

const PAGE_SIZE: usize = 10;
const SEARCH_FIELDS: &[&str] = &["name", "city", "phone"];

#[derive(Clone, Debug)]
pub struct BranchRow {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub created_at: String,
}

impl From<Branch> for BranchRow {
    fn from(b: Branch) -> Self {
        Self {
            id: b.id,
            name: b.name,
            city: b.city,
            address: b.address.unwrap_or_default(),
            phone: b.phone,
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

impl FieldAccess for BranchRow {
    fn field(&self, path: &str) -> Option<String> {
        match path {
            "name" => Some(self.name.clone()),
            "city" => Some(self.city.clone()),
            "phone" => Some(self.phone.clone()),
            _ => None,
        }
    }
}

impl Sortable for BranchRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BranchList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let (error, set_error) = signal::<Option<String>>(None);
    let list = RwSignal::new(FilteredList::<BranchRow>::new(SEARCH_FIELDS));
    let pager = RwSignal::new(PagedView::new(PAGE_SIZE));
    let ticket = FetchTicket::new();

    // (field, ascending); empty field means fetch order.
    let sort = RwSignal::new(("", true));

    let fetch_all = move || {
        let t = ticket.begin();
        spawn_local(async move {
            match fetch_branches().await {
                Ok(items) if ticket.is_current(t) => {
                    let rows = items.into_iter().map(BranchRow::from).collect();
                    apply_rows(list, pager, rows);
                    let _ = set_error.try_set(None);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("branch fetch failed: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    let can_create = use_can(modules::BRANCH, actions::CREATE);
    let can_update = use_can(modules::BRANCH, actions::UPDATE);
    let can_delete = use_can(modules::BRANCH, actions::DELETE);
    let show_actions = Signal::derive(move || can_update.get() || can_delete.get());

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

    let toggle_sort = move |field: &'static str| {
        sort.update(|(current, asc)| {
            if *current == field {
                *asc = !*asc;
            } else {
                *current = field;
                *asc = true;
            }
        });
    };

    let open_upsert_modal = move |existing: Option<BranchRow>| {
        modal_stack.push_with_style(
            Some("max-width: 480px; width: 480px;".to_string()),
            move |handle| {
                let editing = existing.clone();
                let title = if editing.is_some() {
                    "Edit branch"
                } else {
                    "New branch"
                };

                let (name, set_name) =
                    signal(editing.as_ref().map(|b| b.name.clone()).unwrap_or_default());
                let (city, set_city) =
                    signal(editing.as_ref().map(|b| b.city.clone()).unwrap_or_default());
                let (address, set_address) = signal(
                    editing
                        .as_ref()
                        .map(|b| b.address.clone())
                        .unwrap_or_default(),
                );
                let (phone, set_phone) =
                    signal(editing.as_ref().map(|b| b.phone.clone()).unwrap_or_default());
                let (modal_error, set_modal_error) = signal::<Option<String>>(None);

                let edit_id = editing.as_ref().map(|b| b.id);
                let handle_save = handle.clone();
                let save = move |_| {
                    let name = name.get().trim().to_string();
                    let city = city.get().trim().to_string();
                    let phone = phone.get().trim().to_string();
                    if name.is_empty() || city.is_empty() || phone.is_empty() {
                        set_modal_error
                            .set(Some("Name, city and phone are required".to_string()));
                        return;
                    }
                    let address = address.get().trim().to_string();
                    let body = BranchUpsertRequest {
                        name,
                        city,
                        address: if address.is_empty() {
                            None
                        } else {
                            Some(address)
                        },
                        phone,
                    };
                    let handle = handle_save.clone();
                    spawn_local(async move {
                        let result = match edit_id {
                            Some(id) => {
                                api_utils::put_json(&format!("/api/branch/{}", id), &body).await
                            }
                            None => api_utils::post_json("/api/branch", &body).await,
                        };
                        match result {
                            Ok(()) => {
                                handle.close();
                                fetch_all();
                            }
                            Err(e) => {
                                let _ =
                                    set_modal_error.try_set(Some(format!("Save failed: {}", e)));
                            }
                        }
                    });
                };

                let handle_cancel = handle.clone();
                view! {
                    <div class="modal-body">
                        <h3>{title}</h3>
                        {move || modal_error.get().map(|e| view! { <div class="error">{e}</div> })}
                        <div class="form-group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"City"</label>
                            <input
                                type="text"
                                prop:value=move || city.get()
                                on:input=move |ev| set_city.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Address"</label>
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Phone"</label>
                            <input
                                type="text"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-actions">
                            <button class="button button--primary" on:click=save>
                                "Save"
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

    let delete_branch = move |id: Uuid| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this branch?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api_utils::delete(&format!("/api/branch/{}", id)).await {
                Ok(()) => fetch_all(),
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Delete failed: {}", e)));
                }
            }
        });
    };

    let page_rows = move || {
        let (field, asc) = sort.get();
        let p = pager.get();
        let mut rows = list.with(|l| l.filtered().to_vec());
        if !field.is_empty() {
            sort_list(&mut rows, field, asc);
        }
        p.page_slice(&rows).to_vec()
    };

    fetch_all();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Branches"</h2>
                <div class="header__actions">
                    <Show when=move || can_create.get()>
                        <button
                            class="button button--primary"
                            on:click=move |_| open_upsert_modal(None)
                        >
                            {icon("plus")}
                            "New Branch"
                        </button>
                    </Show>
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="list-toolbar">
                <SearchBox value=search_term on_input=on_search placeholder="Search by name, city, phone..." />
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
                            <th class="table__header-cell table__header-cell--sortable"
                                on:click=move |_| toggle_sort("name")>
                                {move || {
                                    let (field, asc) = sort.get();
                                    format!("Name{}", sort_indicator(field, "name", asc))
                                }}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable"
                                on:click=move |_| toggle_sort("city")>
                                {move || {
                                    let (field, asc) = sort.get();
                                    format!("City{}", sort_indicator(field, "city", asc))
                                }}
                            </th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell table__header-cell--sortable"
                                on:click=move |_| toggle_sort("created_at")>
                                {move || {
                                    let (field, asc) = sort.get();
                                    format!("Created{}", sort_indicator(field, "created_at", asc))
                                }}
                            </th>
                            <Show when=move || show_actions.get()>
                                <th class="table__header-cell">"Actions"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows().into_iter().map(|row| {
                            let id = row.id;
                            let row_for_edit = row.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{row.city.clone()}</td>
                                    <td class="table__cell">{row.address.clone()}</td>
                                    <td class="table__cell">{row.phone.clone()}</td>
                                    <td class="table__cell">{format_date(&row.created_at)}</td>
                                    <Show when=move || show_actions.get()>
                                        {
                                            let row_for_edit = row_for_edit.clone();
                                            view! {
                                                <td class="table__cell table__cell--actions">
                                                    <Show when=move || can_update.get()>
                                                        {
                                                            let row = row_for_edit.clone();
                                                            view! {
                                                                <button class="button button--small" title="Edit"
                                                                    on:click=move |_| open_upsert_modal(Some(row.clone()))>
                                                                    {icon("edit")}
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                    <Show when=move || can_delete.get()>
                                                        <button class="button button--small button--danger" title="Delete"
                                                            on:click=move |_| delete_branch(id)>
                                                            {icon("delete")}
                                                        </button>
                                                    </Show>
                                                </td>
                                            }
                                        }
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

async fn fetch_branches() -> Result<Vec<Branch>, String> {
    api_utils::get_json("/api/branch").await
}
