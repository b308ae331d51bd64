//! Create Point Form Store
//!
//! The whole page state lives in one `FormState`, changed only through
//! `FormState::apply`. The page wraps it in a `reactive_stores::Store` for
//! field-level reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::geolocation::GeolocationError;
use crate::models::{
    City, Coordinate, FieldKey, FormFields, Item, SubmissionPayload, Uf, NO_SELECTION, PLACEHOLDER_NUMBER,
};

/// Outcome of the one-shot geolocation request
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GeoStatus {
    #[default]
    Pending,
    Resolved,
    Failed(GeolocationError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Every transition the page can go through
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    EditField { field: FieldKey, value: String },
    SelectUf(String),
    SelectCity(String),
    ToggleItem(u32),
    MapClicked(Coordinate),
    ItemsLoaded(Vec<Item>),
    UfsLoaded(Vec<Uf>),
    /// Cities fetched for `uf`; dropped unless `uf` is still selected
    CitiesLoaded { uf: String, cities: Vec<City> },
    GeolocationResolved(Result<Coordinate, GeolocationError>),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Item catalog, in server order
    pub items: Vec<Item>,
    pub ufs: Vec<Uf>,
    /// Cities of `selected_uf` (empty until they arrive)
    pub cities: Vec<City>,
    pub fields: FormFields,
    pub selected_uf: String,
    pub selected_city: String,
    pub selected_items: BTreeSet<u32>,
    /// Map view center, seeded from the device position
    pub initial_center: Coordinate,
    /// Point picked by clicking the map
    pub selected_point: Coordinate,
    pub geolocation: GeoStatus,
    pub submit: SubmitStatus,
}

pub type FormStore = Store<FormState>;

/// Key driving the city fetch: `None` while no UF is chosen
pub fn cities_fetch_key(selected_uf: &str) -> Option<String> {
    if selected_uf.is_empty() || selected_uf == NO_SELECTION {
        None
    } else {
        Some(selected_uf.to_string())
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            selected_uf: NO_SELECTION.to_string(),
            selected_city: NO_SELECTION.to_string(),
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::EditField { field, value } => self.fields.set(field, value),
            FormAction::SelectUf(uf) => {
                if uf != self.selected_uf {
                    // The previous list belongs to another UF
                    self.cities.clear();
                    self.selected_city = NO_SELECTION.to_string();
                }
                self.selected_uf = uf;
            }
            FormAction::SelectCity(city) => self.selected_city = city,
            FormAction::ToggleItem(id) => {
                if !self.selected_items.remove(&id) {
                    self.selected_items.insert(id);
                }
            }
            FormAction::MapClicked(at) => self.selected_point = at,
            FormAction::ItemsLoaded(items) => self.items = items,
            FormAction::UfsLoaded(ufs) => self.ufs = ufs,
            FormAction::CitiesLoaded { uf, cities } => {
                if cities_fetch_key(&self.selected_uf).as_deref() == Some(uf.as_str()) {
                    self.cities = cities;
                }
            }
            FormAction::GeolocationResolved(Ok(at)) => {
                self.initial_center = at;
                self.geolocation = GeoStatus::Resolved;
            }
            FormAction::GeolocationResolved(Err(err)) => self.geolocation = GeoStatus::Failed(err),
            FormAction::SubmitStarted => self.submit = SubmitStatus::Submitting,
            FormAction::SubmitSucceeded => self.submit = SubmitStatus::Succeeded,
            FormAction::SubmitFailed(reason) => self.submit = SubmitStatus::Failed(reason),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit == SubmitStatus::Submitting
    }

    /// Snapshot of everything the backend receives
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            whatsapp: self.fields.whatsapp.clone(),
            uf: self.selected_uf.clone(),
            city: self.selected_city.clone(),
            latitude: self.selected_point.latitude,
            longitude: self.selected_point.longitude,
            items: self.selected_items.iter().copied().collect(),
            number: PLACEHOLDER_NUMBER,
        }
    }

    /// Enter `Submitting` and return the payload, or `None` if a submission
    /// is already in flight
    pub fn start_submission(&mut self) -> Option<SubmissionPayload> {
        if self.is_submitting() {
            return None;
        }
        self.apply(FormAction::SubmitStarted);
        Some(self.payload())
    }
}

/// Apply an action to the page store. Returns `false` (and does nothing)
/// once the page is gone.
pub fn dispatch(store: FormStore, action: FormAction) -> bool {
    store.try_update(|state| state.apply(action)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn city(name: &str) -> City {
        City { name: name.to_string() }
    }

    fn replay(state: &mut FormState, actions: impl IntoIterator<Item = FormAction>) {
        for action in actions {
            state.apply(action);
        }
    }

    #[test]
    fn test_new_state_uses_sentinels_and_origin() {
        let state = FormState::new();

        assert_eq!(state.selected_uf, "0");
        assert_eq!(state.selected_city, "0");
        assert_eq!(state.initial_center, Coordinate::new(0.0, 0.0));
        assert_eq!(state.selected_point, Coordinate::new(0.0, 0.0));
        assert_eq!(state.geolocation, GeoStatus::Pending);
        assert_eq!(state.submit, SubmitStatus::Idle);
    }

    #[test]
    fn test_toggle_replay_keeps_odd_counts() {
        // Deterministic pseudo-random toggle sequences
        for seed in 1u64..200 {
            let mut rng = seed;
            let mut state = FormState::new();
            let mut counts: HashMap<u32, usize> = HashMap::new();

            for _ in 0..(seed % 37) {
                rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let id = ((rng >> 33) % 8) as u32;
                *counts.entry(id).or_default() += 1;
                state.apply(FormAction::ToggleItem(id));
            }

            let expected: BTreeSet<u32> = counts
                .into_iter()
                .filter(|(_, n)| n % 2 == 1)
                .map(|(id, _)| id)
                .collect();
            assert_eq!(state.selected_items, expected, "seed {}", seed);
        }
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut state = FormState::new();
        replay(&mut state, [FormAction::ToggleItem(3), FormAction::ToggleItem(5), FormAction::ToggleItem(3)]);

        assert_eq!(state.selected_items, BTreeSet::from([5]));
    }

    #[test]
    fn test_stale_city_response_is_dropped() {
        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::SelectUf("SP".into()),
            FormAction::SelectUf("BA".into()),
            // BA resolves first, the slow SP response arrives afterwards
            FormAction::CitiesLoaded { uf: "BA".into(), cities: vec![city("Salvador")] },
            FormAction::CitiesLoaded { uf: "SP".into(), cities: vec![city("Campinas")] },
        ]);
        assert_eq!(state.cities, vec![city("Salvador")]);

        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::SelectUf("SP".into()),
            FormAction::SelectUf("BA".into()),
            FormAction::CitiesLoaded { uf: "SP".into(), cities: vec![city("Campinas")] },
            FormAction::CitiesLoaded { uf: "BA".into(), cities: vec![city("Salvador")] },
        ]);
        assert_eq!(state.cities, vec![city("Salvador")]);
    }

    #[test]
    fn test_changing_uf_clears_cities_and_city() {
        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::SelectUf("BA".into()),
            FormAction::CitiesLoaded { uf: "BA".into(), cities: vec![city("Salvador"), city("Ilhéus")] },
            FormAction::SelectCity("Salvador".into()),
            FormAction::SelectUf("SP".into()),
        ]);

        assert!(state.cities.is_empty());
        assert_eq!(state.selected_city, "0");
    }

    #[test]
    fn test_reselecting_same_uf_keeps_city() {
        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::SelectUf("BA".into()),
            FormAction::CitiesLoaded { uf: "BA".into(), cities: vec![city("Salvador")] },
            FormAction::SelectCity("Salvador".into()),
            FormAction::SelectUf("BA".into()),
        ]);

        assert_eq!(state.cities, vec![city("Salvador")]);
        assert_eq!(state.selected_city, "Salvador");
    }

    #[test]
    fn test_cities_for_sentinel_are_never_applied() {
        let mut state = FormState::new();
        state.apply(FormAction::CitiesLoaded { uf: "0".into(), cities: vec![city("Nowhere")] });

        assert!(state.cities.is_empty());
    }

    #[test]
    fn test_sentinel_has_no_fetch_key() {
        assert_eq!(cities_fetch_key("0"), None);
        assert_eq!(cities_fetch_key(""), None);
        assert_eq!(cities_fetch_key("BA"), Some("BA".to_string()));
    }

    #[test]
    fn test_field_edits_do_not_clobber_each_other() {
        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::EditField { field: FieldKey::Name, value: "Acme".into() },
            FormAction::EditField { field: FieldKey::Email, value: "a@a.com".into() },
            FormAction::EditField { field: FieldKey::Whatsapp, value: "119999".into() },
        ]);

        assert_eq!(state.fields, FormFields {
            name: "Acme".into(),
            email: "a@a.com".into(),
            whatsapp: "119999".into(),
        });
    }

    #[test]
    fn test_map_click_replaces_selected_point() {
        let mut state = FormState::new();
        state.apply(FormAction::MapClicked(Coordinate::new(1.0, 2.0)));
        state.apply(FormAction::MapClicked(Coordinate::new(-12.97, -38.50)));

        assert_eq!(state.selected_point, Coordinate::new(-12.97, -38.50));
        // Clicking never moves the view center
        assert_eq!(state.initial_center, Coordinate::default());
    }

    #[test]
    fn test_geolocation_outcomes() {
        let mut state = FormState::new();
        state.apply(FormAction::GeolocationResolved(Ok(Coordinate::new(-12.94, -38.47))));
        assert_eq!(state.initial_center, Coordinate::new(-12.94, -38.47));
        assert_eq!(state.geolocation, GeoStatus::Resolved);

        let mut state = FormState::new();
        let denied = GeolocationError::PermissionDenied("denied".into());
        state.apply(FormAction::GeolocationResolved(Err(denied.clone())));
        assert_eq!(state.initial_center, Coordinate::default());
        assert_eq!(state.geolocation, GeoStatus::Failed(denied));
    }

    #[test]
    fn test_payload_matches_backend_contract() {
        let mut state = FormState::new();
        replay(&mut state, [
            FormAction::EditField { field: FieldKey::Name, value: "Acme".into() },
            FormAction::EditField { field: FieldKey::Email, value: "a@a.com".into() },
            FormAction::EditField { field: FieldKey::Whatsapp, value: "119999".into() },
            FormAction::SelectUf("BA".into()),
            FormAction::SelectCity("Salvador".into()),
            FormAction::MapClicked(Coordinate::new(-12.97, -38.50)),
            FormAction::ToggleItem(4),
            FormAction::ToggleItem(2),
        ]);

        let json = serde_json::to_value(state.payload()).unwrap();
        assert_eq!(json, serde_json::json!({
            "name": "Acme",
            "email": "a@a.com",
            "whatsapp": "119999",
            "uf": "BA",
            "cidade": "Salvador",
            "latitude": -12.97,
            "longitude": -38.50,
            "items": [2, 4],
            "numero": 1
        }));
    }

    #[test]
    fn test_submission_allows_no_city() {
        let mut state = FormState::new();
        state.apply(FormAction::SelectUf("BA".into()));

        let payload = state.start_submission().unwrap();
        assert_eq!(payload.city, "0");
    }

    #[test]
    fn test_dispatch_after_page_disposed_is_noop() {
        let owner = Owner::new();
        owner.set();
        let page = owner.child();
        let store = page.with(|| Store::new(FormState::new()));

        assert!(dispatch(store, FormAction::ToggleItem(1)));
        assert!(store.with_untracked(|s| s.selected_items.contains(&1)));

        page.cleanup();
        assert!(!dispatch(store, FormAction::ToggleItem(2)));
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = FormState::new();

        assert!(state.start_submission().is_some());
        assert!(state.is_submitting());
        // A second submit while in flight is ignored
        assert!(state.start_submission().is_none());

        state.apply(FormAction::SubmitFailed("network error".into()));
        assert_eq!(state.submit, SubmitStatus::Failed("network error".into()));

        // Manual retry after failure
        assert!(state.start_submission().is_some());
        state.apply(FormAction::SubmitSucceeded);
        assert_eq!(state.submit, SubmitStatus::Succeeded);
    }
}
