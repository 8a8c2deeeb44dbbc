use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use velocity_core::error::Result;
use velocity_core::RequestCounter;

use crate::dispatch::{RouteHandler, RouteRequest};

pub const X_COUNT: &str = "x-count";

/// Reports the request counter in both `X-Count` and the body.
pub struct CountHandler {
    counter: Arc<RequestCounter>,
}

impl CountHandler {
    pub fn new(counter: Arc<RequestCounter>) -> Self {
        Self { counter }
    }
}

#[async_trait]
impl RouteHandler for CountHandler {
    fn name(&self) -> &'static str {
        "count"
    }

    async fn handle(&self, _req: RouteRequest) -> Result<Response> {
        // Single read so header and body always agree.
        let n = self.counter.read();
        Ok((StatusCode::OK, [(X_COUNT, HeaderValue::from(n))], n.to_string()).into_response())
    }
}
