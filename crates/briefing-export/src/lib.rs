//! briefing-export
//!
//! Renders a [`Deck`](briefing_core::models::slide::Deck) into a paginated
//! PDF or a PPTX slide deck, and manages the transient file each download
//! passes through.

pub mod artifact;
pub mod error;
pub mod format;
#[cfg(feature = "pdf")]
pub mod pdf;
#[cfg(feature = "pptx")]
pub mod pptx;
pub mod preflight;
pub mod render;
