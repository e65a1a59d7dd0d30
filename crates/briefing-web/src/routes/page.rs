//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and rendered with Tera. Their
//! `.html` names turn on autoescaping for every interpolated value.

use serde::Serialize;
use tera::{Context, Tera};

use briefing_export::format::Format;
use briefing_export::preflight::remediation;

/// Heading of the landing page.
pub const APP_TITLE: &str = "Cloud Security CCSP Presentation Generator";

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    (
        "missing_backend.html",
        include_str!("../../templates/missing_backend.html"),
    ),
];

#[derive(Serialize)]
struct Trigger {
    extension: &'static str,
    label: String,
}

#[derive(Serialize)]
struct Notice {
    format: String,
    remediation: Vec<String>,
}

fn templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

fn base_context(notices: Vec<Notice>) -> Context {
    let mut context = Context::new();
    context.insert("app_title", APP_TITLE);
    context.insert("notices", &notices);
    context
}

/// Landing page: title, a one-line explanation and one trigger per format.
/// Each backend in `missing` gets a remediation notice.
pub fn index(deck_title: &str, missing: &[Format]) -> Result<String, tera::Error> {
    let notices = missing
        .iter()
        .map(|format| Notice {
            format: format.to_string(),
            remediation: remediation(*format),
        })
        .collect();
    let triggers: Vec<Trigger> = Format::ALL
        .into_iter()
        .map(|format| Trigger {
            extension: format.extension(),
            label: format.to_string(),
        })
        .collect();

    let mut context = base_context(notices);
    context.insert("deck_title", deck_title);
    context.insert("formats", &triggers);
    templates()?.render("index.html", &context)
}

/// Shown instead of a download when the backend for `format` is missing.
pub fn missing_backend(format: Format, remediation: &[String]) -> Result<String, tera::Error> {
    let mut context = base_context(vec![Notice {
        format: format.to_string(),
        remediation: remediation.to_vec(),
    }]);
    context.insert("format", &format.to_string());
    templates()?.render("missing_backend.html", &context)
}
