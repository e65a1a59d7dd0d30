//! briefing-core
//!
//! Pure content model, theme, and the literal CCSP slide catalog.
//! No I/O and no rendering dependency. This is the shared vocabulary
//! both export backends consume.

pub mod catalog;
pub mod models;
pub mod theme;
