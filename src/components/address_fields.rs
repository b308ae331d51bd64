//! Address Fields Component
//!
//! Map point picker plus the cascading UF / city selects.

use leptos::prelude::*;
use leptos_leaflet_map::{GeoPoint, LeafletMap};

use crate::context::use_app_context;
use crate::models::NO_SELECTION;
use crate::store::{dispatch, FormAction, FormStateStoreFields, FormStore};

#[component]
pub fn AddressFields(store: FormStore) -> impl IntoView {
    let config = use_app_context().config();

    let center = Signal::derive(move || GeoPoint::from(store.initial_center().get()));
    let marker = Signal::derive(move || GeoPoint::from(store.selected_point().get()));
    let on_map_click = Callback::new(move |at: GeoPoint| {
        dispatch(store, FormAction::MapClicked(at.into()));
    });

    view! {
        <fieldset>
            <legend>
                <h2>"Endereço"</h2>
                <span>"Selecione o endereço no mapa"</span>
            </legend>

            <LeafletMap
                class="map"
                center=center
                marker=marker
                zoom=config.map_zoom
                tile_url=config.tile_url
                attribution=config.tile_attribution
                on_click=on_map_click
            />

            <div class="field-group">
                <div class="field">
                    <label for="uf">"Estado (UF)"</label>
                    <select
                        name="uf"
                        id="uf"
                        on:change=move |ev| { dispatch(store, FormAction::SelectUf(event_target_value(&ev))); }
                    >
                        <option value=NO_SELECTION>"Selecione uma UF"</option>
                        <For
                            each=move || store.ufs().get()
                            key=|uf| uf.code.clone()
                            children=move |uf| {
                                let code = uf.code.clone();
                                view! {
                                    <option
                                        value=uf.code
                                        prop:selected=move || store.selected_uf().get() == code
                                    >
                                        {uf.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="field">
                    <label for="cidade">"Cidade"</label>
                    <select
                        name="cidade"
                        id="cidade"
                        on:change=move |ev| { dispatch(store, FormAction::SelectCity(event_target_value(&ev))); }
                    >
                        <option
                            value=NO_SELECTION
                            prop:selected=move || store.selected_city().get() == NO_SELECTION
                        >
                            "Selecione uma cidade"
                        </option>
                        <For
                            each=move || store.cities().get()
                            key=|city| city.name.clone()
                            children=move |city| {
                                let name = city.name.clone();
                                let label = city.name.clone();
                                view! {
                                    <option
                                        value=city.name
                                        prop:selected=move || store.selected_city().get() == name
                                    >
                                        {label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
            </div>
        </fieldset>
    }
}
