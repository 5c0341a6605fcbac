use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_branch::ui::list::BranchList;
use crate::domain::a002_broker::ui::list::BrokerList;
use crate::domain::a003_vehicle_stock::ui::list::VehicleStockList;
use crate::domain::a004_booking::ui::list::BookingList;
use crate::domain::a005_rto::ui::list::RtoList;
use crate::domain::a006_voucher::ui::list::VoucherList;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="content">"Not found"</div> }>
                    <Route path=path!("/") view=BookingList />
                    <Route path=path!("/bookings") view=BookingList />
                    <Route path=path!("/stock") view=VehicleStockList />
                    <Route path=path!("/rto") view=RtoList />
                    <Route path=path!("/vouchers") view=VoucherList />
                    <Route path=path!("/brokers") view=BrokerList />
                    <Route path=path!("/branches") view=BranchList />
                </Routes>
            </Shell>
            <ModalHost />
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
