//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Top-level views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    CreatePoint,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: AppConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Switch page; the previous page is unmounted
    pub fn navigate(&self, to: Page) {
        self.set_page.set(to);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
