use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State as AxumState,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{error::AppError, state::State};

#[derive(Deserialize)]
pub struct SavePlanRequest {
    #[serde(rename = "planData")]
    plan_data: Value,
}

/// Entry point for `/save_plan`. The route is registered with
/// [`axum::routing::any`] so unsupported verbs get our own 405 body instead
/// of the framework default, and a bare OPTIONS pre-flight short-circuits
/// with an empty 200.
pub async fn save_plan_handler(
    method: Method,
    AxumState(state): AxumState<Arc<State>>,
    body: Bytes,
) -> Response {
    match method {
        Method::POST => match save_plan(state, body).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        },
        Method::OPTIONS => StatusCode::OK.into_response(),
        _ => AppError::MethodNotAllowed.into_response(),
    }
}

async fn save_plan(state: Arc<State>, body: Bytes) -> Result<Response, AppError> {
    let plan = parse_plan(&body)?;

    state.store.save(&plan).await.map_err(|e| {
        warn!("Failed to write plan data: {e}");
        AppError::SaveFailed(e)
    })?;

    info!("Plan data saved to {:?}", state.store.path());

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Plan data saved successfully" })),
    )
        .into_response())
}

/// Pulls the `planData` collection out of the request body. Anything that is
/// not JSON, is missing the field, or carries a scalar there is rejected.
fn parse_plan(body: &[u8]) -> Result<Value, AppError> {
    let request: SavePlanRequest =
        serde_json::from_slice(body).map_err(|_| AppError::InvalidData)?;

    match request.plan_data {
        plan @ (Value::Array(_) | Value::Object(_)) => Ok(plan),
        _ => Err(AppError::InvalidData),
    }
}
