//! # Precedence Pair Handlers
//!
//! The core endpoint: accept a precedence pair submission, resolve a
//! dependency ordering, and answer with either the sorted node list or a
//! cycle diagnostic.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use crate::graph::{resolve_order, CycleDiagnostics, DependencyGraph, PrecedencePair};
use crate::web::response_types::{ApiError, ApiResult, CycleResponse, SortResponse};
use crate::web::state::AppState;

/// Request body for `POST /api/submit_pairs`.
#[derive(Debug, Deserialize)]
pub struct SubmitPairsRequest {
    #[serde(default)]
    pub pairs: Vec<PrecedencePair>,
}

/// Resolve a dependency ordering: POST /api/submit_pairs
///
/// Malformed bodies and validation failures answer 400 with the parser or
/// validator message. A cycle is not an error: it answers 200 with a
/// diagnostic naming cycle-breaking candidates.
pub async fn submit_pairs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitPairsRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|rejection| ApiError::malformed(rejection.body_text()))?;

    state.validation.validate_pairs(&request.pairs)?;

    debug!(pairs = ?request.pairs, "received precedence pairs");

    let graph = DependencyGraph::from_pairs(&request.pairs);

    info!(
        pair_count = request.pairs.len(),
        node_count = graph.node_count(),
        edge_count = graph.edge_count(),
        "resolving dependency order"
    );

    match resolve_order(&graph) {
        Ok(sorted) => {
            debug!(sorted = ?sorted, "dependency order resolved");
            Ok(Json(SortResponse { sorted }).into_response())
        }
        Err(_cycle) => {
            let diagnostics = CycleDiagnostics::analyze(&graph);
            info!(
                most_outgoing = %diagnostics.most_outgoing,
                most_outgoing_count = diagnostics.most_outgoing_count,
                least_incoming = %diagnostics.least_incoming,
                least_incoming_count = diagnostics.least_incoming_count,
                "cycle detected in submitted pairs"
            );
            Ok(Json(CycleResponse::from(diagnostics)).into_response())
        }
    }
}
