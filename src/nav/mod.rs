//! Navigation access control.

pub mod guard;
