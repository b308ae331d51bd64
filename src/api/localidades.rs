//! IBGE Localidades
//!
//! States (UFs) and the cities of one state.

use web_sys::AbortSignal;

use super::{get_json, ApiError};
use crate::config::AppConfig;
use crate::models::{City, Uf};

pub async fn list_ufs(config: &AppConfig, signal: Option<&AbortSignal>) -> Result<Vec<Uf>, ApiError> {
    get_json(&config.ufs_url(), signal).await
}

pub async fn list_cities(config: &AppConfig, uf: &str, signal: Option<&AbortSignal>) -> Result<Vec<City>, ApiError> {
    get_json(&config.cities_url(uf), signal).await
}
