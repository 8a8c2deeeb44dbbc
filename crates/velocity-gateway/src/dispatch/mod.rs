//! Dispatcher module exports.
//!
//! Re-exports the route table, dispatcher, and handler trait so downstream
//! consumers can depend on this module directly.

pub mod dispatcher;
pub mod route_table;

pub use dispatcher::{Dispatcher, RouteHandler, RouteRequest};
pub use route_table::{RouteMatch, RouteTable};
