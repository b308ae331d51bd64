//! Device Geolocation
//!
//! One-shot position request wrapped as a future.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::Coordinate;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available in this browser")]
    Unavailable,
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Other(String),
}

impl GeolocationError {
    /// Classify a `PositionError` code
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => Self::PermissionDenied(message),
            2 => Self::PositionUnavailable(message),
            3 => Self::Timeout(message),
            _ => Self::Other(message),
        }
    }

    fn from_js(value: JsValue) -> Self {
        match value.dyn_ref::<web_sys::PositionError>() {
            Some(err) => Self::from_code(err.code(), err.message()),
            None => Self::Other(format!("{:?}", value)),
        }
    }
}

/// Ask the browser for the current position once
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unavailable)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unavailable)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    let value = JsFuture::from(promise).await.map_err(GeolocationError::from_js)?;
    let position: web_sys::Position = value.unchecked_into();
    let coords = position.coords();
    Ok(Coordinate::new(coords.latitude(), coords.longitude()))
}
