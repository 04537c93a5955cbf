use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{MediaService, TranscriptFetcher};
use crate::application::services::CallbackOutcome;
use crate::presentation::state::AppState;

pub const SIGNATURE_HEADER: &str = "x-hook-signature";
pub const CHALLENGE_HEADER: &str = "x-hook-challenge";

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub err: String,
}

/// Inbound callback endpoint. The body is taken as raw bytes because the
/// signature covers the exact wire form. Everything except an internal
/// fault answers 200 so the provider's retry policy stays quiet.
#[tracing::instrument(skip(state, headers, body))]
pub async fn webhook_handler<M, F>(
    State(state): State<AppState<M, F>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    M: MediaService + 'static,
    F: TranscriptFetcher + 'static,
{
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let challenge = headers.get(CHALLENGE_HEADER).cloned();

    let result = state.dispatcher.dispatch(&body, signature).await;

    // The challenge handshake only applies to authenticated callbacks.
    let echo_challenge = !matches!(result, Ok(CallbackOutcome::RejectedSignature));

    let mut response = match result {
        Ok(CallbackOutcome::RejectedSignature) => {
            (StatusCode::OK, "signature mismatch, callback ignored").into_response()
        }
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Callback handling failed");
            let code = e.status();
            let status =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(ErrorBody {
                    code,
                    err: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    if echo_challenge {
        if let Some(value) = challenge {
            response
                .headers_mut()
                .insert(HeaderName::from_static(CHALLENGE_HEADER), value);
        }
    }

    response
}
