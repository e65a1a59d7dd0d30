//! Flowable PDF backend.
//!
//! Rendering happens in two stages. [`layout`] turns the deck into a
//! [`FlowDocument`] of positioned draw operations, one page group per
//! slide. [`encode`](encode::encode) then writes that document out with
//! `pdf-writer`. Nothing in either stage reads the clock, so the same
//! deck always produces the same bytes.

pub mod encode;
pub mod flow;
pub mod metrics;
pub mod page;
pub mod story;

use tracing::{debug, info};

use briefing_core::models::slide::Deck;
use briefing_core::theme::Theme;

use crate::error::ExportError;
use crate::format::{Artifact, Format, Rendered};

use self::flow::paginate;
use self::page::{FlowDocument, PageGroup, PageSetup};
use self::story::slide_story;

/// Lay out every slide of `deck` as its own page group.
pub fn layout(deck: &Deck, theme: &Theme, setup: &PageSetup) -> FlowDocument {
    let groups = deck
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let blocks = slide_story(slide, theme, setup.frame_width());
            let pages = paginate(blocks, setup);
            debug!(slide = i + 1, title = %slide.title, pages = pages.len(), "laid out slide");
            PageGroup {
                title: slide.title.clone(),
                pages,
            }
        })
        .collect();

    FlowDocument {
        title: deck.title.clone(),
        setup: *setup,
        groups,
    }
}

pub fn render_pdf(deck: &Deck, theme: &Theme) -> Result<Rendered, ExportError> {
    if deck.is_empty() {
        return Err(ExportError::Pdf("deck has no slides".to_string()));
    }

    let doc = layout(deck, theme, &PageSetup::letter());
    let bytes = encode::encode(&doc);
    info!(
        slides = doc.groups.len(),
        pages = doc.page_count(),
        bytes = bytes.len(),
        "encoded PDF"
    );

    Ok(Rendered {
        artifact: Artifact {
            format: Format::Pdf,
            bytes,
        },
        warnings: Vec::new(),
    })
}
