//! HTTP surface of the update endpoint
//!
//! A single fallback route answers any method and path, so routers with
//! hard-coded ddclient-style update URLs all land on the handler. The
//! handler hands the raw `Authorization` header and the query parameters
//! to the core pipeline and maps its result onto the response table:
//!
//! | Condition | Status | Body |
//! |---|---|---|
//! | No Authorization header | 401 | "You need to login." + `WWW-Authenticate` |
//! | Malformed Authorization header | 400 | "Malformed authorization header." |
//! | Bad credentials | 401 | "You need to login." + `WWW-Authenticate` |
//! | Missing `hostname` | 400 | "No hostname provided" |
//! | Missing `myip` | 400 | "No myip provided" |
//! | No owning zone | 400 | "Zone not found" |
//! | Invalid `myip` | 400 | "Invalid IP address" |
//! | Record created | 200 | "DNS record created successfully" |
//! | Record updated | 200 | "DNS record updated successfully" |
//! | Provider-call failure | 500 | "Error modifying DNS record" |

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use dynup_core::{Error, UpdateOutcome, UpdatePipeline};
use tracing::{debug, error};

/// Shared state: the pipeline behind every request
#[derive(Clone)]
struct AppState {
    pipeline: Arc<UpdatePipeline>,
}

/// Build the router serving the update endpoint on every path.
pub fn router(pipeline: UpdatePipeline) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };
    Router::new().fallback(update).with_state(state)
}

/// Handle one update request end to end.
async fn update(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    // A header that is present but not valid UTF-8 is malformed, not absent
    let authorization = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or(""));

    match state.pipeline.handle(authorization, &query).await {
        Ok(outcome) => success_response(outcome),
        Err(err) => {
            if err.is_provider_failure() {
                error!(error = %err, "provider call failed");
            } else {
                debug!(error = %err, "request rejected");
            }
            error_response(&err)
        }
    }
}

fn success_response(outcome: UpdateOutcome) -> Response {
    let body = match outcome {
        UpdateOutcome::Created => "DNS record created successfully",
        UpdateOutcome::Updated => "DNS record updated successfully",
    };
    (StatusCode::OK, body).into_response()
}

fn error_response(err: &Error) -> Response {
    match err {
        Error::AuthMissing | Error::AuthInvalid => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic")],
            "You need to login.",
        )
            .into_response(),
        Error::AuthMalformed => {
            (StatusCode::BAD_REQUEST, "Malformed authorization header.").into_response()
        }
        Error::MissingParameter(name) => {
            (StatusCode::BAD_REQUEST, format!("No {name} provided")).into_response()
        }
        Error::ZoneNotFound(_) => (StatusCode::BAD_REQUEST, "Zone not found").into_response(),
        Error::InvalidAddress(_) => {
            (StatusCode::BAD_REQUEST, "Invalid IP address").into_response()
        }
        Error::Config(_) | Error::Provider { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Error modifying DNS record").into_response()
        }
    }
}
