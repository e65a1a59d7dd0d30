//! Backend availability gate.
//!
//! Each renderer is compiled in behind a cargo feature. Callers check the
//! gate before rendering so a build without a backend answers with
//! remediation steps instead of a partial artifact.

use crate::error::ExportError;
use crate::format::Format;

/// Whether the backend for `format` was compiled into this build.
pub fn backend_available(format: Format) -> bool {
    match format {
        Format::Pdf => cfg!(feature = "pdf"),
        Format::Pptx => cfg!(feature = "pptx"),
    }
}

/// Steps that make the `format` backend available, most common first.
pub fn remediation(format: Format) -> Vec<String> {
    let feature = format.feature();
    vec![
        format!(
            "The {format} backend is not compiled in. Rebuild with: `cargo build --release --features {feature}`"
        ),
        format!(
            "If you installed the server binary, reinstall it with: `cargo install --path crates/briefing-web --features {feature}`"
        ),
        "Both backends are enabled by default; check the build for `--no-default-features`."
            .to_string(),
        format!(
            "For container or CI builds, add `{feature}` to the feature list passed to cargo."
        ),
    ]
}

/// Fail fast when the backend for `format` is missing.
pub fn preflight(format: Format) -> Result<(), ExportError> {
    if backend_available(format) {
        Ok(())
    } else {
        Err(ExportError::MissingBackend {
            format,
            remediation: remediation(format),
        })
    }
}

/// Formats whose backend is missing from this build.
pub fn missing_backends() -> Vec<Format> {
    Format::ALL
        .into_iter()
        .filter(|f| !backend_available(*f))
        .collect()
}
