//! Item Catalog

use web_sys::AbortSignal;

use super::{get_json, ApiError};
use crate::config::AppConfig;
use crate::models::Item;

pub async fn list_items(config: &AppConfig, signal: Option<&AbortSignal>) -> Result<Vec<Item>, ApiError> {
    get_json(&config.items_url(), signal).await
}
