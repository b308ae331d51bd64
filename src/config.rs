//! Application Configuration
//!
//! Endpoints and map defaults. Base URLs can be overridden at build time
//! with `ECOLETA_API_URL` and `ECOLETA_IBGE_URL`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection point backend (`/items`, `/points`)
    pub api_base_url: String,
    /// IBGE localidades service (`/estados`, `/estados/{uf}/municipios`)
    pub ibge_base_url: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub map_zoom: f64,
    /// Shown in a blocking alert after a successful registration
    pub success_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(
            option_env!("ECOLETA_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("ECOLETA_IBGE_URL").unwrap_or(DEFAULT_IBGE_URL),
        )
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str, ibge_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            ibge_base_url: ibge_base_url.trim_end_matches('/').to_string(),
            tile_url: OSM_TILE_URL.to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            map_zoom: 15.0,
            success_message: "Ponto de coleta criado!".to_string(),
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base_url)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.api_base_url)
    }

    pub fn ufs_url(&self) -> String {
        format!("{}/estados?orderBy=nome", self.ibge_base_url)
    }

    pub fn cities_url(&self, uf: &str) -> String {
        format!(
            "{}/estados/{}/municipios",
            self.ibge_base_url,
            utf8_percent_encode(uf, NON_ALPHANUMERIC)
        )
    }
}
