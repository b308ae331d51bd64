//! Contact Fields Component
//!
//! Entity name, e-mail and WhatsApp inputs.

use leptos::prelude::*;

use crate::models::FieldKey;
use crate::store::{dispatch, FormAction, FormStateStoreFields, FormStore};

/// One labelled text input bound to a form field
#[component]
fn TextField(
    store: FormStore,
    field: FieldKey,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let name = field.input_name();
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                type=input_type
                name=name
                id=name
                prop:value=move || store.fields().read().get(field).to_string()
                on:input=move |ev| {
                    dispatch(store, FormAction::EditField { field, value: event_target_value(&ev) });
                }
            />
        </div>
    }
}

#[component]
pub fn ContactFields(store: FormStore) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>
            <TextField store=store field=FieldKey::Name label="Nome da entidade" />
            <div class="field-group">
                <TextField store=store field=FieldKey::Email label="E-mail" input_type="email" />
                <TextField store=store field=FieldKey::Whatsapp label="Whatsapp" />
            </div>
        </fieldset>
    }
}
