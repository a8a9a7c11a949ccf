//! Bridges the shared controller to the Yew component tree.

use crate::models::ui_state::UiStore;
use crate::session::LocalStorageSession;
use gloo_timers::callback::Timeout;
use shared::api::TodoClient;
use shared::controller::{AppState, Controller, Event, NotificationId, UiEffect, View};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use wasm_bindgen_futures::spawn_local;
use yewdux::Dispatch;

pub type WebController = Controller<TodoClient, LocalStorageSession, WebView>;

/// Publishes controller snapshots into the [`UiStore`] and owns the
/// auto-dismiss timers of visible notifications.
pub struct WebView {
    dispatch: Dispatch<UiStore>,
    timeout_ms: u32,
    timers: RefCell<HashMap<NotificationId, Timeout>>,
    controller: Weak<WebController>,
}

impl WebView {
    pub fn new(dispatch: Dispatch<UiStore>, timeout_ms: u32, controller: Weak<WebController>) -> Self {
        Self {
            dispatch,
            timeout_ms,
            timers: RefCell::new(HashMap::new()),
            controller,
        }
    }

    fn schedule_dismiss(&self, id: NotificationId) {
        let controller = self.controller.clone();
        let timeout = Timeout::new(self.timeout_ms, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            // The timer is dropped outside its own callback.
            spawn_local(async move {
                controller.view().timers.borrow_mut().remove(&id);
                controller.dispatch(Event::NotificationExpired(id)).await;
            });
        });
        self.timers.borrow_mut().insert(id, timeout);
    }
}

impl View for WebView {
    fn render(&self, state: &AppState) {
        let app = state.clone();
        self.dispatch.reduce_mut(move |store| store.app = app);
    }

    fn apply(&self, effect: UiEffect, _state: &AppState) {
        match effect {
            UiEffect::ScheduleDismiss(id) => self.schedule_dismiss(id),
            UiEffect::CancelDismiss(id) => {
                self.timers.borrow_mut().remove(&id);
            }
            other => self.dispatch.reduce_mut(move |store| store.apply(other)),
        }
    }
}
