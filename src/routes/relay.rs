use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::AppState;
use crate::relay::{RelayError, RequestDescriptor, UpstreamReply};

/// `POST /api/relay` — replay a caller-supplied request description against
/// its real target and pass the upstream status and body through verbatim.
/// Every failure is translated into a structured reply; nothing escapes as
/// an unhandled fault.
pub async fn relay_request(
    State(state): State<AppState>,
    payload: Result<Json<RequestDescriptor>, JsonRejection>,
) -> Response {
    let Json(descriptor) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(message = %rejection.body_text(), "Rejected relay payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    tracing::debug!(
        method = %descriptor.method,
        url = %descriptor.url,
        "Relaying request"
    );

    let result = state.relay.relay(descriptor).await;
    outcome_response(result)
}

/// Maps a relay outcome onto the wire shape: `{ "data": body }` carrying
/// the upstream status on success, `{ "error": message }` with the
/// classified status on failure.
pub(crate) fn outcome_response(result: Result<UpstreamReply, RelayError>) -> Response {
    match result {
        Ok(reply) => {
            tracing::debug!(status = reply.status, "Upstream replied");
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "data": reply.body }))).into_response()
        }
        Err(error) => {
            tracing::warn!(error = %error, "Relay failed");
            let status = match &error {
                RelayError::MalformedInput(_) => StatusCode::BAD_REQUEST,
                RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}
