//! Items Grid Component
//!
//! Collectible item categories; clicking one toggles its selection.

use leptos::prelude::*;

use crate::store::{dispatch, FormAction, FormStateStoreFields, FormStore};

#[component]
pub fn ItemsGrid(store: FormStore) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Ítens de coleta"</h2>
                <span>"Selecione um ou mais ítens abaixo"</span>
            </legend>
            <ul class="items-grid">
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let is_selected = move || store.selected_items().read().contains(&id);
                        view! {
                            <li
                                class=move || if is_selected() { "selected" } else { "" }
                                on:click=move |_| { dispatch(store, FormAction::ToggleItem(id)); }
                            >
                                <img src=item.image_url alt=item.title.clone() />
                                <span>{item.title}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
