//! Ecoleta Frontend App
//!
//! Switches between the landing page and the registration form.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::create_point::CreatePoint;
use crate::home::Home;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), AppConfig::default()));

    view! {
        {move || match page.get() {
            Page::Home => view! { <Home /> }.into_any(),
            Page::CreatePoint => view! { <CreatePoint /> }.into_any(),
        }}
    }
}
