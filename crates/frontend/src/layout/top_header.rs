use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user
            .map(|u| {
                let name = u.full_name.unwrap_or(u.username);
                format!("{} — {}", name, u.branch_name)
            })
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Dealer Console"</div>
            <div class="top-header__user">
                <span class="top-header__user-name">{user_label}</span>
                <span class="top-header__role">{move || auth_state.get().role}</span>
                <button class="button button--ghost" on:click=move |_| do_logout() title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
