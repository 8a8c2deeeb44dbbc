//! Velocity gateway library entry.
//!
//! Wires config, the CORS policy, the route table and dispatcher, and the
//! built-in handlers into an axum app. Consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod policy;
pub mod router;
pub mod services;
