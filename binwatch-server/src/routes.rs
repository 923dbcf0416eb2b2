//! HTTP route definitions.
//!
//! - GET  /bins                  - List bins
//! - GET  /bins/{bin_id}         - Get bin
//! - POST /bins/{bin_id}/update  - Update bin from query parameters

use std::num::IntErrorKind;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::{get, post},
};
use binwatch_core::{Bin, BinId, BinService, BinUpdate};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Confirmation message returned by the update endpoint.
const UPDATE_MESSAGE: &str = "Bin status updated";

/// Response for a committed update.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateResponse {
    pub(crate) message: &'static str,
    pub(crate) bin: Bin,
}

/// Build the router serving the bin endpoints.
pub(crate) fn router(service: Arc<BinService>) -> Router {
    Router::new()
        .route("/bins", get(list_bins))
        .route("/bins/{bin_id}", get(get_bin))
        .route("/bins/{bin_id}/update", post(update_bin))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn list_bins(State(service): State<Arc<BinService>>) -> Json<Vec<Bin>> {
    Json(service.bins().await)
}

async fn get_bin(
    State(service): State<Arc<BinService>>,
    bin_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Bin>, ApiError> {
    let Path(bin_id) = bin_id?;
    let bin = service.bin(parse_bin_id(&bin_id)?).await?;
    Ok(Json(bin))
}

async fn update_bin(
    State(service): State<Arc<BinService>>,
    bin_id: Result<Path<String>, PathRejection>,
    params: Result<Query<BinUpdate>, QueryRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Path(bin_id) = bin_id?;
    let id = parse_bin_id(&bin_id)?;
    let Query(update) = params?;
    let bin = service.update_bin(id, update).await?;
    Ok(Json(UpdateResponse {
        message: UPDATE_MESSAGE,
        bin,
    }))
}

// Integers too large for a `BinId` cannot name a stored bin, so they are
// reported as missing rather than malformed.
fn parse_bin_id(raw: &str) -> Result<BinId, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(BinId(id)),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ApiError::NotFound)
        }
        Err(err) => Err(ApiError::InvalidInput(format!("Invalid bin id `{raw}`: {err}"))),
    }
}
