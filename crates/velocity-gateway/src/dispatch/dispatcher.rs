use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

use velocity_core::error::{Result, VelocityError};
use velocity_core::RequestCounter;

use crate::policy::CorsPolicy;

use super::route_table::RouteTable;

/// What a handler sees of the inbound request.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    /// Value bound to the pattern's parameter segment, if it has one.
    pub param: Option<String>,
}

/// Route handlers. Pure with respect to the request; any state they need is
/// handed to them at construction.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(&self, req: RouteRequest) -> Result<Response>;
}

/// Counts every request, answers preflights, routes the rest, and stamps the
/// CORS policy on whatever comes back.
pub struct Dispatcher {
    routes: RouteTable,
    counter: Arc<RequestCounter>,
    cors: Arc<CorsPolicy>,
}

impl Dispatcher {
    pub fn new(routes: RouteTable, counter: Arc<RequestCounter>, cors: Arc<CorsPolicy>) -> Self {
        Self {
            routes,
            counter,
            cors,
        }
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.counter
    }

    pub async fn dispatch(&self, req: Request<Body>) -> Response {
        // Exactly once per request, before matching, whatever the outcome.
        let seq = self.counter.increment();

        let (parts, _body) = req.into_parts();
        let origin = parts.headers.get(ORIGIN).cloned();
        let span = tracing::debug_span!(
            "dispatch",
            method = %parts.method,
            path = %parts.uri.path(),
            seq
        );

        let mut resp = async {
            if is_preflight(&parts.method, &parts.headers) {
                tracing::debug!("cors preflight");
                return StatusCode::OK.into_response();
            }

            let path = parts.uri.path();
            let Some(m) = self.routes.find(&parts.method, path) else {
                tracing::debug!("no route");
                return reject(&VelocityError::NotFound(path.to_string()));
            };

            let handler = m.route.handler();
            let req = RouteRequest {
                param: m.param.map(|(_, v)| v),
            };

            match handler.handle(req).await {
                Ok(resp) => {
                    tracing::debug!(handler = handler.name(), status = %resp.status(), "handled");
                    resp
                }
                Err(e) => {
                    tracing::warn!(handler = handler.name(), error = %e, "handler failed");
                    reject(&e)
                }
            }
        }
        .instrument(span)
        .await;

        self.cors.apply(origin.as_ref(), resp.headers_mut());
        resp
    }
}

/// `OPTIONS` with `Access-Control-Request-Method`; `Origin` is not required.
fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
    *method == Method::OPTIONS && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Plain-text error response. Not-found keeps the body clients already expect.
fn reject(err: &VelocityError) -> Response {
    let status = StatusCode::from_u16(err.client_code().http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        VelocityError::NotFound(_) => "404 page not found\n".to_string(),
        other => format!("{other}\n"),
    };
    (status, body).into_response()
}
