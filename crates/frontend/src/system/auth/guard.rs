//! Permission gating.
//!
//! A capability is a `{module, action}` pair matched exactly and
//! case-sensitively; absence is the normal "false" case, not an error.
//! Screens that gate on "any of several actions" call `use_can` once per
//! action and OR the results.

use contracts::system::auth::Permission;
use leptos::prelude::*;

use super::context::use_auth;

pub fn has_permission(permissions: &[Permission], module: &str, action: &str) -> bool {
    permissions
        .iter()
        .any(|p| p.module == module && p.action == action)
}

/// Reactive capability check against the current session.
pub fn use_can(module: &'static str, action: &'static str) -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || has_permission(&auth_state.get().permissions, module, action))
}

/// Renders children only when the session holds `module`/`action`.
#[component]
pub fn Can(
    #[prop(into)] module: String,
    #[prop(into)] action: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show when=move || {
            has_permission(&auth_state.get().permissions, &module, &action)
        }>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms() -> Vec<Permission> {
        vec![
            Permission::new("BOOKING", "READ"),
            Permission::new("BOOKING", "APPROVE"),
            Permission::new("VOUCHER", "READ"),
        ]
    }

    #[test]
    fn grants_exact_matches_only() {
        let p = perms();
        assert!(has_permission(&p, "BOOKING", "READ"));
        assert!(has_permission(&p, "BOOKING", "APPROVE"));
        assert!(!has_permission(&p, "BOOKING", "DELETE"));
        assert!(!has_permission(&p, "VOUCHER", "APPROVE"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let p = perms();
        assert!(!has_permission(&p, "booking", "READ"));
        assert!(!has_permission(&p, "BOOKING", "read"));
    }

    #[test]
    fn empty_set_denies_everything() {
        assert!(!has_permission(&[], "BOOKING", "READ"));
        assert!(!has_permission(&[], "", ""));
    }
}
