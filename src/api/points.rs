//! Collection Points

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::ApiError;
use crate::config::AppConfig;
use crate::models::SubmissionPayload;

/// POST a new collection point. Any 2xx counts as success; the body is ignored.
pub async fn create_point(
    config: &AppConfig,
    payload: &SubmissionPayload,
    signal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let url = config.points_url();
    let response = Request::post(&url).abort_signal(signal).json(payload)?.send().await?;
    if !response.ok() {
        return Err(ApiError::Status { status: response.status(), url });
    }
    Ok(())
}
