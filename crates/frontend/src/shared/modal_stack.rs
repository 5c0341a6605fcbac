//! Centralized modal stack: screens push modal content and get back a
//! handle they can close from inside event handlers. Escape closes the
//! topmost modal only.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::shared::modal_frame::ModalFrame;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    modal_style: Option<String>,
}

#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Push a modal; `builder` receives a handle so the content can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_style(None, builder)
    }

    pub fn push_with_style<F>(&self, modal_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_style,
            });
        });

        handle
    }

    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: removing an entry synchronously during the
            // originating DOM event dispatch drops a live closure.
            TimeoutFuture::new(0).await;
            let _ = svc.stack.try_update(|s| s.retain(|e| e.id != id));
        });
    }

    fn close_top(&self) {
        if let Some(top) = self.stack.with_untracked(|s| s.last().map(|e| e.id)) {
            self.close_deferred(top);
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack; mounted once in the app shell.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // App-lifetime Escape listener; the closure is intentionally leaked.
    if let Some(window) = web_sys::window() {
        let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                svc.close_top();
            }
        });
        let _ = window
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    view! {
        <For
            each=move || svc.stack.get()
            key=|entry| entry.id
            children=move |entry| {
                let handle = ModalHandle { id: entry.id, svc };
                let close_handle = handle.clone();
                view! {
                    <ModalFrame
                        on_close=Callback::new(move |_| close_handle.close())
                        modal_style=entry.modal_style.clone()
                    >
                        {(entry.builder)(handle.clone())}
                    </ModalFrame>
                }
            }
        />
    }
}
