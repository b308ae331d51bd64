//! Home Page
//!
//! Landing view with the entry point to the registration form.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="page-home">
            <div class="content">
                <header>
                    <img src="assets/logo.svg" alt="Ecoleta" />
                </header>
                <main>
                    <h1>"Seu marketplace de coleta de resíduos."</h1>
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
                    <a
                        href="/create-point"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::CreatePoint);
                        }
                    >
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </a>
                </main>
            </div>
        </div>
    }
}
