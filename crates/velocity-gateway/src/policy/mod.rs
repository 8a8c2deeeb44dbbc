//! Policy layer.
//!
//! Compiles the cross-origin configuration into ready-made header values so
//! the dispatcher only copies them onto each response.

pub mod cors;

pub use cors::CorsPolicy;
