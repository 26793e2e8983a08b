//! Routed pages, one module per destination.

pub mod annotations;
pub mod landing;
pub mod library;
pub mod login;
pub mod profile;
pub mod reader;
pub mod signup;
pub mod stats;
