use tracing::info;

use briefing_core::models::slide::Deck;
use briefing_core::theme::Theme;

use crate::error::ExportError;
use crate::format::{Format, Rendered};
use crate::preflight::{preflight, remediation};

/// Render `deck` with the backend for `format`.
///
/// Runs the backend gate first; a missing backend yields
/// [`ExportError::MissingBackend`] without touching the deck.
pub fn render(format: Format, deck: &Deck, theme: &Theme) -> Result<Rendered, ExportError> {
    preflight(format)?;

    let rendered: Rendered = match format {
        #[cfg(feature = "pdf")]
        Format::Pdf => crate::pdf::render_pdf(deck, theme)?,
        #[cfg(feature = "pptx")]
        Format::Pptx => crate::pptx::render_pptx(deck, theme)?,
        #[allow(unreachable_patterns)]
        missing => {
            return Err(ExportError::MissingBackend {
                format: missing,
                remediation: remediation(missing),
            });
        }
    };

    info!(
        format = %format,
        slides = deck.len(),
        bytes = rendered.artifact.bytes.len(),
        warnings = rendered.warnings.len(),
        "rendered deck"
    );
    Ok(rendered)
}
