//! Network layer: typed wire shapes and HTTP request shims.

pub mod api;
pub mod types;
