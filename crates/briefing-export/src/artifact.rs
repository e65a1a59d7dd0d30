//! Transient artifact lifecycle.
//!
//! A render is written to a uniquely named file in a scratch directory,
//! read back in full, and the file is removed before the bytes are handed
//! to the caller. The temp file handle owns the path, so removal also
//! happens on every early return.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use briefing_core::catalog::ARTIFACT_STEM;
use briefing_core::models::slide::Deck;
use briefing_core::theme::Theme;

use crate::error::ExportError;
use crate::format::{Format, RenderWarning};
use crate::preflight::preflight;
use crate::render::render;

/// A fully materialized download, ready to hand to the user.
#[derive(Debug, Clone)]
pub struct Download {
    pub format: Format,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub warnings: Vec<RenderWarning>,
}

/// Render `deck`, pass the result through a transient file in
/// `scratch_dir`, and return the captured bytes.
///
/// The transient file never outlives this call, whether the read-back
/// succeeds or not. A failed removal is logged and otherwise ignored.
pub fn materialize(
    format: Format,
    deck: &Deck,
    theme: &Theme,
    scratch_dir: &Path,
) -> Result<Download, ExportError> {
    preflight(format)?;

    let rendered = render(format, deck, theme)?;

    let mut transient = tempfile::Builder::new()
        .prefix(&format!("{ARTIFACT_STEM}-"))
        .suffix(&format!(".{}", format.extension()))
        .tempfile_in(scratch_dir)?;
    transient.write_all(&rendered.artifact.bytes)?;
    transient.flush()?;
    debug!(path = %transient.path().display(), "wrote transient artifact");

    let read_back = std::fs::read(transient.path());
    release(transient);
    let bytes = read_back?;

    Ok(Download {
        format,
        file_name: format.file_name(),
        mime: format.mime(),
        bytes,
        warnings: rendered.warnings,
    })
}

fn release(transient: NamedTempFile) {
    let path = transient.path().to_path_buf();
    match transient.close() {
        Ok(()) => debug!(path = %path.display(), "removed transient artifact"),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove transient artifact"),
    }
}
