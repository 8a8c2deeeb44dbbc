//! Top-level facade crate for Velocity.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use velocity_core::*;
}

pub mod gateway {
    pub use velocity_gateway::*;
}
