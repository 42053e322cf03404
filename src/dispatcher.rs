//! Intent Dispatcher
//!
//! Copyable handle to the controller, provided via Leptos context. Every UI
//! event becomes an `Intent` run on its own local task, so in-flight intents
//! never block each other.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use task_sync::{HttpTaskApi, Intent, SyncController};

use crate::confirm::BrowserConfirm;
use crate::view::SignalView;

pub type AppController = SyncController<HttpTaskApi, SignalView, BrowserConfirm>;

#[derive(Clone, Copy)]
pub struct Dispatcher {
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl Dispatcher {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Initial load
    pub fn init(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(async move { controller.init().await });
        }
    }

    pub fn send(&self, intent: Intent) {
        match self.controller.try_get_value() {
            Some(controller) => spawn_local(async move { controller.dispatch(intent).await }),
            None => log::warn!("Dropped {:?}: controller disposed", intent),
        }
    }
}

/// Get the dispatcher from context
pub fn use_dispatcher() -> Dispatcher {
    expect_context::<Dispatcher>()
}
