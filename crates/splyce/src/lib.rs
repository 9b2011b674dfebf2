//! Top-level facade crate for splyce.
//!
//! Re-exports the protocol core and the bridge library so users can depend on a single crate.

pub mod core {
    pub use splyce_core::*;
}

pub mod bridge {
    pub use splyce_bridge::*;
}
