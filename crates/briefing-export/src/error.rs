use thiserror::Error;

use crate::format::Format;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{format} export backend is not available in this build")]
    MissingBackend {
        format: Format,
        /// User-facing steps that make the backend available.
        remediation: Vec<String>,
    },

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("PPTX generation failed: {0}")]
    Pptx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "pptx")]
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
