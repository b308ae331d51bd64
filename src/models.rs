//! Frontend Models
//!
//! Data structures matching the backend and the IBGE geography service.

use serde::{Deserialize, Serialize};

/// Placeholder value of both selects meaning "nothing chosen"
pub const NO_SELECTION: &str = "0";

/// Collectible item category (served by the backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "image")]
    pub image_url: String,
}

/// Federative unit (UF), from the IBGE `estados` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uf {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// City, from the IBGE `municipios` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<leptos_leaflet_map::GeoPoint> for Coordinate {
    fn from(p: leptos_leaflet_map::GeoPoint) -> Self {
        Self::new(p.lat, p.lng)
    }
}

impl From<Coordinate> for leptos_leaflet_map::GeoPoint {
    fn from(c: Coordinate) -> Self {
        Self::new(c.latitude, c.longitude)
    }
}

/// Contact text inputs of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Identifies one text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Email,
    Whatsapp,
}

impl FieldKey {
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl FormFields {
    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Email => self.email = value,
            FieldKey::Whatsapp => self.whatsapp = value,
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Whatsapp => &self.whatsapp,
        }
    }
}

/// Body of `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    #[serde(rename = "cidade")]
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
    /// The form has no street number input
    #[serde(rename = "numero")]
    pub number: u32,
}

pub const PLACEHOLDER_NUMBER: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accepts_both_wire_shapes() {
        let current: Item = serde_json::from_str(
            r#"{"id":1,"title":"Lâmpadas","image_url":"http://localhost:3333/uploads/lampadas.svg"}"#,
        ).unwrap();
        let legacy: Item = serde_json::from_str(
            r#"{"id":1,"titulo":"Lâmpadas","image":"http://localhost:3333/uploads/lampadas.svg"}"#,
        ).unwrap();

        assert_eq!(current, legacy);
        assert_eq!(current.title, "Lâmpadas");
    }

    #[test]
    fn test_ibge_shapes_ignore_extra_fields() {
        let ufs: Vec<Uf> = serde_json::from_str(
            r#"[{"id":29,"sigla":"BA","nome":"Bahia","regiao":{"id":2,"sigla":"NE","nome":"Nordeste"}}]"#,
        ).unwrap();
        assert_eq!(ufs, vec![Uf { code: "BA".into(), name: "Bahia".into() }]);

        let cities: Vec<City> = serde_json::from_str(
            r#"[{"id":2927408,"nome":"Salvador","microrregiao":{"id":29021}}]"#,
        ).unwrap();
        assert_eq!(cities[0].name, "Salvador");
    }

    #[test]
    fn test_form_fields_set_is_per_key() {
        let mut fields = FormFields::default();
        fields.set(FieldKey::Name, "Acme".into());
        fields.set(FieldKey::Email, "a@a.com".into());

        assert_eq!(fields.get(FieldKey::Name), "Acme");
        assert_eq!(fields.get(FieldKey::Email), "a@a.com");
        assert_eq!(fields.get(FieldKey::Whatsapp), "");
    }
}
