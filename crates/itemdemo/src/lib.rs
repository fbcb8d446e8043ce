//! Top-level facade crate for itemdemo.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use itemdemo_core::*;
}

pub mod server {
    pub use itemdemo_server::*;
}
