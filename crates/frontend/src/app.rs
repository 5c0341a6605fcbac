use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Centralized modal management for all screens.
    provide_context(ModalStackService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
