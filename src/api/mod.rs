//! HTTP API Wrappers
//!
//! Frontend bindings to the collection point backend and the IBGE service,
//! organized by domain.

mod error;
mod items;
mod localidades;
mod points;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

// Re-export all public items
pub use error::*;
pub use items::*;
pub use localidades::*;
pub use points::*;

/// GET `url` and decode the JSON body, failing on non-2xx statuses
async fn get_json<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T, ApiError> {
    let response = Request::get(url).abort_signal(signal).send().await?;
    if !response.ok() {
        return Err(ApiError::Status { status: response.status(), url: url.to_string() });
    }
    response.json::<T>().await.map_err(ApiError::decode)
}
