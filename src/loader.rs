//! Remote Data Loader
//!
//! Fetch effects of the create-point page. Every request carries an abort
//! signal owned by the page, so nothing lands in the store after unmount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{AbortController, AbortSignal};

use crate::api::{self, ApiError};
use crate::config::AppConfig;
use crate::geolocation;
use crate::store::{cities_fetch_key, dispatch, FormAction, FormStateStoreFields, FormStore};

fn abort_stored(controller: StoredValue<Option<AbortController>, LocalStorage>) {
    controller.try_update_value(|c| {
        if let Some(c) = c.take() {
            c.abort();
        }
    });
}

fn log_read_failure(what: &str, err: &ApiError) {
    if err.is_aborted() {
        log::debug!("[LOADER] {} request aborted", what);
    } else {
        log::warn!("[LOADER] Could not load {}: {}", what, err);
    }
}

/// Abort controller shared by the requests of one page, aborted on unmount
#[derive(Clone, Copy)]
pub struct PageRequests {
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl PageRequests {
    pub fn new() -> Self {
        let controller = StoredValue::new_local(AbortController::new().ok());
        on_cleanup(move || abort_stored(controller));
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller
            .try_with_value(|c| c.as_ref().map(|c| c.signal()))
            .flatten()
    }
}

/// What to do with the city request after a UF selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityFetchStep {
    /// Abort the request issued for the previous key
    pub abort_previous: bool,
    /// Start a request for this UF
    pub fetch: Option<String>,
}

/// Remembers the UF the last city request was issued for
#[derive(Debug, Clone, Default)]
pub struct CityFetchTracker {
    current: Option<String>,
}

impl CityFetchTracker {
    pub fn on_selection(&mut self, selected_uf: &str) -> CityFetchStep {
        let key = cities_fetch_key(selected_uf);
        if key == self.current {
            return CityFetchStep::default();
        }
        let abort_previous = self.current.is_some();
        self.current = key.clone();
        CityFetchStep { abort_previous, fetch: key }
    }
}

/// One-shot loads: item catalog, UF list and device position
pub fn load_on_mount(store: FormStore, config: AppConfig, requests: PageRequests) {
    let signal = requests.signal();

    {
        let config = config.clone();
        let signal = signal.clone();
        spawn_local(async move {
            match api::list_items(&config, signal.as_ref()).await {
                Ok(items) => {
                    log::info!("[LOADER] Loaded {} items", items.len());
                    dispatch(store, FormAction::ItemsLoaded(items));
                }
                Err(e) => log_read_failure("items", &e),
            }
        });
    }

    spawn_local(async move {
        match api::list_ufs(&config, signal.as_ref()).await {
            Ok(ufs) => {
                log::info!("[LOADER] Loaded {} UFs", ufs.len());
                dispatch(store, FormAction::UfsLoaded(ufs));
            }
            Err(e) => log_read_failure("UFs", &e),
        }
    });

    spawn_local(async move {
        let position = geolocation::current_position().await;
        match &position {
            Ok(at) => log::info!("[GEO] Device at {}, {}", at.latitude, at.longitude),
            Err(e) => log::warn!("[GEO] Position unavailable, map stays at origin: {}", e),
        }
        dispatch(store, FormAction::GeolocationResolved(position));
    });
}

/// Refetch the city list whenever the selected UF changes.
/// The previous request is aborted before the next one starts.
pub fn watch_cities(store: FormStore, config: AppConfig) {
    let inflight = StoredValue::new_local(None::<AbortController>);
    let tracker = StoredValue::new(CityFetchTracker::default());

    Effect::new(move |_| {
        let selected = store.selected_uf().get();
        let Some(step) = tracker.try_update_value(|t| t.on_selection(&selected)) else { return };
        if step.abort_previous {
            abort_stored(inflight);
        }
        let Some(uf) = step.fetch else { return };

        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        inflight.set_value(controller);

        let config = config.clone();
        log::info!("[LOADER] Loading cities for {}", uf);
        spawn_local(async move {
            match api::list_cities(&config, &uf, signal.as_ref()).await {
                Ok(cities) => {
                    log::info!("[LOADER] Loaded {} cities for {}", cities.len(), uf);
                    dispatch(store, FormAction::CitiesLoaded { uf, cities });
                }
                Err(e) => log_read_failure("cities", &e),
            }
        });
    });

    on_cleanup(move || abort_stored(inflight));
}
