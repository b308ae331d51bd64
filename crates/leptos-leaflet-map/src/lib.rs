//! Leptos Leaflet Map
//!
//! Minimal Leaflet binding for Leptos: one map, one tile layer, one marker,
//! and a click callback. Expects the Leaflet script to be loaded globally as `L`.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    type LMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn l_map(el: &web_sys::HtmlElement) -> LMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LMap, center: &LatLng, zoom: f64) -> LMap;

    #[wasm_bindgen(method)]
    fn on(this: &LMap, event: &str, handler: &js_sys::Function) -> LMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LMap) -> LMap;

    type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    fn lat_lng(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LMap) -> TileLayer;

    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(at: &LatLng) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, at: &LatLng) -> Marker;

    type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;
}

/// Geographic point in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn to_js(self) -> LatLng {
        lat_lng(self.lat, self.lng)
    }
}

/// Options object passed to `L.tileLayer`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TileLayerOptions {
    pub attribution: String,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u8,
}

impl TileLayerOptions {
    pub fn new(attribution: impl Into<String>) -> Self {
        Self {
            attribution: attribution.into(),
            max_zoom: 19,
        }
    }
}

/// Live Leaflet objects owned by one mounted component
struct MapHandle {
    map: LMap,
    marker: Marker,
    // Kept alive for as long as the map listens for clicks
    _on_click: Closure<dyn FnMut(LeafletMouseEvent)>,
}

impl MapHandle {
    fn mount(
        el: &web_sys::HtmlElement,
        center: GeoPoint,
        zoom: f64,
        tile_url: &str,
        options: &TileLayerOptions,
        on_click: Callback<GeoPoint>,
    ) -> Self {
        let map = l_map(el);
        map.set_view(&center.to_js(), zoom);

        let js_options = serde_wasm_bindgen::to_value(options).unwrap_or(JsValue::UNDEFINED);
        tile_layer(tile_url, &js_options).add_to(&map);

        let marker = marker(&center.to_js());
        marker.add_to(&map);

        let click = Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
            let at = ev.latlng();
            on_click.run(GeoPoint::new(at.lat(), at.lng()));
        });
        map.on("click", click.as_ref().unchecked_ref());

        Self { map, marker, _on_click: click }
    }

    fn recenter(&self, center: GeoPoint, zoom: f64) {
        self.map.set_view(&center.to_js(), zoom);
    }

    fn move_marker(&self, at: GeoPoint) {
        self.marker.set_lat_lng(&at.to_js());
    }

    fn destroy(self) {
        self.map.remove();
    }
}

/// Leaflet map with a single marker
///
/// Props:
/// - center: view center, re-applied whenever it changes
/// - marker: marker position, moved whenever it changes
/// - on_click: called with the clicked location
#[component]
pub fn LeafletMap(
    #[prop(into)] center: Signal<GeoPoint>,
    #[prop(into)] marker: Signal<GeoPoint>,
    #[prop(into)] tile_url: String,
    #[prop(into)] attribution: String,
    #[prop(into)] on_click: Callback<GeoPoint>,
    #[prop(default = 15.0)] zoom: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);
    let options = TileLayerOptions::new(attribution);

    // Mount once the container is in the DOM
    Effect::new(move |_| {
        let Some(el) = container.get() else { return };
        if handle.with_value(|h| h.is_some()) {
            return;
        }
        let mounted = MapHandle::mount(&el, center.get_untracked(), zoom, &tile_url, &options, on_click);
        mounted.move_marker(marker.get_untracked());
        handle.set_value(Some(mounted));
        log::debug!("[MAP] Leaflet map mounted");
    });

    Effect::new(move |_| {
        let at = center.get();
        handle.with_value(|h| {
            if let Some(h) = h {
                h.recenter(at, zoom);
            }
        });
    });

    Effect::new(move |_| {
        let at = marker.get();
        handle.with_value(|h| {
            if let Some(h) = h {
                h.move_marker(at);
            }
        });
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.destroy();
            }
        });
    });

    view! {
        <div class=class node_ref=container></div>
    }
}
