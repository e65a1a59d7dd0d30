//! Slide-deck (PPTX) backend.
//!
//! Each record becomes one slide bound to the title or title-and-content
//! layout. Charts are written as native chart parts so they stay editable.

pub mod chart;
pub mod package;
pub mod shape;
pub mod slide;
pub mod template;
pub mod xml;

use tracing::{debug, info};

use briefing_core::models::slide::Deck;
use briefing_core::theme::Theme;

use crate::error::ExportError;
use crate::format::{Artifact, Format, Rendered};

use self::slide::SlideBuilder;

pub fn render_pptx(deck: &Deck, theme: &Theme) -> Result<Rendered, ExportError> {
    if deck.is_empty() {
        return Err(ExportError::Pptx("deck has no slides".to_string()));
    }

    let mut slides = Vec::with_capacity(deck.len());
    let mut warnings = Vec::new();
    let mut next_chart = 1;

    for (i, record) in deck.slides.iter().enumerate() {
        let (part, slide_warnings) = SlideBuilder::build(record, theme, i + 1, next_chart).finish();
        next_chart += part.charts.len();
        debug!(
            slide = part.number,
            title = %record.title,
            shapes = part.shapes.len(),
            charts = part.charts.len(),
            "built slide"
        );
        warnings.extend(slide_warnings);
        slides.push(part);
    }

    let bytes = package::write_package(&deck.title, theme, &slides)?;
    info!(
        slides = slides.len(),
        charts = next_chart - 1,
        bytes = bytes.len(),
        "packaged PPTX"
    );

    Ok(Rendered {
        artifact: Artifact {
            format: Format::Pptx,
            bytes,
        },
        warnings,
    })
}
