//! Axum router wiring.
//!
//! axum only accepts and writes; every request lands in the fallback and is
//! handed to our dispatcher, which owns counting, CORS, and route matching.

use axum::{
    extract::{Request, State},
    response::Response,
    Router,
};

use crate::app_state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    state.dispatcher().dispatch(req).await
}
