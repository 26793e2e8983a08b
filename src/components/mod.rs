//! Reusable UI components shared across pages.

pub mod document_card;
pub mod nav_bar;
