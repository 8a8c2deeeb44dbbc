//! Shared application state for the Velocity gateway.
//!
//! Owns the process-wide request counter and the dispatcher built from the
//! static route table. Construction errors are returned, not panicked on.

use std::sync::Arc;

use velocity_core::error::Result;
use velocity_core::RequestCounter;

use crate::config::GatewayConfig;
use crate::dispatch::{Dispatcher, RouteTable};
use crate::policy::CorsPolicy;
use crate::services;

#[derive(Clone)]
pub struct AppState {
    counter: Arc<RequestCounter>,
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(cfg: &GatewayConfig) -> Result<Self> {
        // 1) Compile the cross-origin policy
        let cors = Arc::new(CorsPolicy::new(&cfg.cors)?);

        // 2) Route table, frozen once handed to the dispatcher
        let counter = Arc::new(RequestCounter::new());
        let mut routes = RouteTable::new();
        services::register_builtin(&mut routes, Arc::clone(&counter))?;

        for r in routes.routes() {
            tracing::info!(method = %r.method(), pattern = r.pattern(), handler = r.handler().name(), "route registered");
        }

        let dispatcher = Dispatcher::new(routes, Arc::clone(&counter), cors);

        Ok(Self {
            counter,
            dispatcher: Arc::new(dispatcher),
        })
    }

    pub fn counter(&self) -> Arc<RequestCounter> {
        Arc::clone(&self.counter)
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
