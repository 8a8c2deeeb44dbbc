//! Built-in route handlers.
//!
//! Each handler implements [`RouteHandler`](crate::dispatch::RouteHandler) and
//! is registered on the route table by [`register_builtin`].

pub mod count;
pub mod static_text;
pub mod users;

use std::sync::Arc;

use axum::http::Method;

use velocity_core::error::Result;
use velocity_core::RequestCounter;

use crate::dispatch::RouteTable;

pub use count::CountHandler;
pub use static_text::StaticTextHandler;
pub use users::{UserHandler, UsersHandler};

/// Greeting served on `/`.
pub const HOME_GREETING: &str = "Go Template - Agentic Dev Velocity";

pub fn register_builtin(table: &mut RouteTable, counter: Arc<RequestCounter>) -> Result<()> {
    table.register(Method::GET, "/", Arc::new(StaticTextHandler::new("home", HOME_GREETING)))?;
    table.register(Method::GET, "/health", Arc::new(StaticTextHandler::new("health", "OK")))?;
    table.register(Method::GET, "/api/count", Arc::new(CountHandler::new(counter)))?;
    table.register(Method::GET, "/api/users", Arc::new(UsersHandler::new()))?;
    table.register(Method::GET, "/api/users/{id}", Arc::new(UserHandler::new()))?;
    Ok(())
}
