//! Submission
//!
//! Snapshot the form, POST it once, and leave the page on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::{AppContext, Page};
use crate::loader::PageRequests;
use crate::store::{dispatch, FormAction, FormStore};

/// Record the POST outcome in the store. Returns `true` only when the point
/// was created and the page is still mounted.
fn finish(store: FormStore, outcome: Result<(), ApiError>) -> bool {
    match outcome {
        Ok(()) => dispatch(store, FormAction::SubmitSucceeded),
        Err(e) if e.is_aborted() => {
            log::debug!("[SUBMIT] Request aborted with the page");
            false
        }
        Err(e) => {
            // No user-facing error: the form stays as it is
            log::error!("[SUBMIT] Failed to create point: {}", e);
            dispatch(store, FormAction::SubmitFailed(e.to_string()));
            false
        }
    }
}

pub fn submit(store: FormStore, ctx: AppContext, requests: PageRequests) {
    let Some(payload) = store.try_update(|state| state.start_submission()).flatten() else {
        log::debug!("[SUBMIT] Already submitting, ignored");
        return;
    };
    let config = ctx.config();
    let signal = requests.signal();

    spawn_local(async move {
        log::info!("[SUBMIT] Posting point {:?} with {} items", payload.name, payload.items.len());
        let outcome = api::create_point(&config, &payload, signal.as_ref()).await;
        if finish(store, outcome) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&config.success_message);
            }
            ctx.navigate(Page::Home);
        }
    });
}
