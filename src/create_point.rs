//! Create Point Page
//!
//! Registration form for a new collection point.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddressFields, ContactFields, ItemsGrid};
use crate::context::{use_app_context, Page};
use crate::loader::{self, PageRequests};
use crate::store::{FormState, FormStateStoreFields, SubmitStatus};
use crate::submission;

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(FormState::new());

    let requests = PageRequests::new();

    loader::load_on_mount(store, ctx.config(), requests);
    loader::watch_cities(store, ctx.config());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submission::submit(store, ctx, requests);
    };

    view! {
        <div id="page-create-point">
            <header>
                <img src="assets/logo.svg" alt="Ecoleta" />
                <a
                    href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Home);
                    }
                >
                    "← Voltar para home"
                </a>
            </header>

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                <ContactFields store=store />
                <AddressFields store=store />
                <ItemsGrid store=store />

                <button
                    type="submit"
                    disabled=move || store.submit().get() == SubmitStatus::Submitting
                >
                    "Cadastrar ponto de coleta"
                </button>
            </form>
        </div>
    }
}
