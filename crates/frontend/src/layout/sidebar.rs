use contracts::system::auth::{actions, modules};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::guard::use_can;

/// Navigation sidebar. An entry appears only when the session holds READ on
/// the screen's module.
#[component]
pub fn Sidebar() -> impl IntoView {
    let entries: Vec<(&'static str, &'static str, &'static str)> = vec![
        ("/bookings", "bookings", "Bookings"),
        ("/stock", "stock", "Vehicle Stock"),
        ("/rto", "rto", "RTO"),
        ("/vouchers", "vouchers", "Vouchers"),
        ("/brokers", "brokers", "Brokers"),
        ("/branches", "branches", "Branches"),
    ];

    let module_for = |icon_name: &str| match icon_name {
        "bookings" => modules::BOOKING,
        "stock" => modules::STOCK,
        "rto" => modules::RTO,
        "vouchers" => modules::VOUCHER,
        "brokers" => modules::BROKER,
        "branches" => modules::BRANCH,
        _ => "",
    };

    view! {
        <nav class="sidebar">
            {entries
                .into_iter()
                .map(|(href, icon_name, label)| {
                    let can_read = use_can(module_for(icon_name), actions::READ);
                    view! {
                        <Show when=move || can_read.get()>
                            <A href=href attr:class="sidebar__link">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </A>
                        </Show>
                    }
                })
                .collect_view()}
        </nav>
    }
}
