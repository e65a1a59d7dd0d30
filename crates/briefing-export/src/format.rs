use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use briefing_core::catalog::ARTIFACT_STEM;

/// Output formats, one per renderer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Paginated, flowable document.
    Pdf,
    /// Fixed-canvas slide deck.
    Pptx,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Pdf, Format::Pptx];

    pub fn mime(self) -> &'static str {
        match self {
            Format::Pdf => "application/pdf",
            Format::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Pdf => "pdf",
            Format::Pptx => "pptx",
        }
    }

    /// Download file name, e.g. `cloud_security_ccsp.pdf`.
    pub fn file_name(self) -> String {
        format!("{ARTIFACT_STEM}.{}", self.extension())
    }

    /// Cargo feature that compiles this backend in.
    pub fn feature(self) -> &'static str {
        self.extension()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Pdf => "PDF",
            Format::Pptx => "PPTX",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Format::Pdf),
            "pptx" => Ok(Format::Pptx),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// A finished document held in memory.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub format: Format,
    pub bytes: Vec<u8>,
}

/// Non-fatal degradation noticed while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// A chart series kept default styling because it could not take a fill.
    SeriesFillUnsupported {
        slide: usize,
        series: String,
        reason: String,
    },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::SeriesFillUnsupported {
                slide,
                series,
                reason,
            } => write!(
                f,
                "slide {slide}: series '{series}' kept default styling ({reason})"
            ),
        }
    }
}

/// Output of a renderer: the artifact plus any warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub artifact: Artifact,
    pub warnings: Vec<RenderWarning>,
}
