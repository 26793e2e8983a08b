//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. `auth` owns the authoritative session record; `persist`
//! is its local-storage mirror and holds no authority of its own.

pub mod auth;
pub mod persist;
