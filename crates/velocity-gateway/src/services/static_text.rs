use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use velocity_core::error::Result;

use crate::dispatch::{RouteHandler, RouteRequest};

/// Fixed plain-text body with status 200. Serves `/` and `/health`.
pub struct StaticTextHandler {
    name: &'static str,
    body: &'static str,
}

impl StaticTextHandler {
    pub fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }
}

#[async_trait]
impl RouteHandler for StaticTextHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn handle(&self, _req: RouteRequest) -> Result<Response> {
        Ok((StatusCode::OK, self.body).into_response())
    }
}
