//! OPC packaging: every part of the deck written into one zip archive.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

use briefing_core::theme::Theme;

use super::slide::SlidePart;
use super::template;
use super::xml::{DECLARATION, NS_P, NS_R, escape};
use crate::error::ExportError;

/// Canvas: 10 in × 7.5 in.
pub const SLIDE_WIDTH_EMU: i64 = 9_144_000;
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_BASE: &str = "application/vnd.openxmlformats-officedocument";

/// Accumulates parts into a zip archive.
///
/// Every entry carries the same fixed timestamp, so identical decks
/// produce identical archives.
pub struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
    }

    pub fn add_part(&mut self, path: &str, content: &[u8]) -> Result<(), ExportError> {
        self.zip.start_file(path, Self::options())?;
        self.zip.write_all(content)?;
        Ok(())
    }

    /// Start a part and let `write` stream its content.
    pub fn add_part_with<F>(&mut self, path: &str, write: F) -> Result<(), ExportError>
    where
        F: FnOnce(&mut ZipWriter<Cursor<Vec<u8>>>) -> std::io::Result<()>,
    {
        self.zip.start_file(path, Self::options())?;
        write(&mut self.zip)?;
        Ok(())
    }

    pub fn finish_to_bytes(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.zip.finish()?.into_inner())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the complete presentation package.
pub fn write_package(
    title: &str,
    theme: &Theme,
    slides: &[SlidePart],
) -> Result<Vec<u8>, ExportError> {
    let chart_count: usize = slides.iter().map(|s| s.charts.len()).sum();
    let mut package = PackageWriter::new();

    package.add_part("[Content_Types].xml", content_types(slides.len(), chart_count).as_bytes())?;
    package.add_part("_rels/.rels", package_rels().as_bytes())?;
    package.add_part("docProps/core.xml", core_props(title).as_bytes())?;
    package.add_part("docProps/app.xml", app_props(slides.len()).as_bytes())?;

    package.add_part("ppt/presentation.xml", presentation(slides.len()).as_bytes())?;
    package.add_part(
        "ppt/_rels/presentation.xml.rels",
        presentation_rels(slides.len()).as_bytes(),
    )?;

    package.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml().as_bytes(),
    )?;
    package.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        rels(&[
            ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
            ("rId2", "slideLayout", "../slideLayouts/slideLayout2.xml"),
            ("rId3", "theme", "../theme/theme1.xml"),
        ])
        .as_bytes(),
    )?;

    let master_rel = rels(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")]);
    for (n, layout) in [
        (1, template::title_layout_xml()),
        (2, template::content_layout_xml()),
    ] {
        package.add_part(&format!("ppt/slideLayouts/slideLayout{n}.xml"), layout.as_bytes())?;
        package.add_part(
            &format!("ppt/slideLayouts/_rels/slideLayout{n}.xml.rels"),
            master_rel.as_bytes(),
        )?;
    }

    package.add_part_with("ppt/theme/theme1.xml", |w| {
        template::write_theme(w, &theme.palette)
    })?;

    for slide in slides {
        let n = slide.number;
        package.add_part_with(&format!("ppt/slides/slide{n}.xml"), |w| slide.write_xml(w))?;
        package.add_part_with(&format!("ppt/slides/_rels/slide{n}.xml.rels"), |w| {
            slide.write_rels(w)
        })?;
        for (chart_n, chart) in &slide.charts {
            package.add_part_with(&format!("ppt/charts/chart{chart_n}.xml"), |w| {
                chart.write_xml(w)
            })?;
        }
    }

    package.finish_to_bytes()
}

fn content_types(slides: usize, charts: usize) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(DECLARATION);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let mut over = |part: String, kind: &str| {
        xml.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="{kind}"/>"#
        ));
    };
    over(
        "/ppt/presentation.xml".to_string(),
        &format!("{CT_BASE}.presentationml.presentation.main+xml"),
    );
    over(
        "/ppt/slideMasters/slideMaster1.xml".to_string(),
        &format!("{CT_BASE}.presentationml.slideMaster+xml"),
    );
    for n in 1..=2 {
        over(
            format!("/ppt/slideLayouts/slideLayout{n}.xml"),
            &format!("{CT_BASE}.presentationml.slideLayout+xml"),
        );
    }
    over(
        "/ppt/theme/theme1.xml".to_string(),
        &format!("{CT_BASE}.theme+xml"),
    );
    for n in 1..=slides {
        over(
            format!("/ppt/slides/slide{n}.xml"),
            &format!("{CT_BASE}.presentationml.slide+xml"),
        );
    }
    for n in 1..=charts {
        over(
            format!("/ppt/charts/chart{n}.xml"),
            &format!("{CT_BASE}.drawingml.chart+xml"),
        );
    }
    over(
        "/docProps/core.xml".to_string(),
        "application/vnd.openxmlformats-package.core-properties+xml",
    );
    over(
        "/docProps/app.xml".to_string(),
        &format!("{CT_BASE}.extended-properties+xml"),
    );

    xml.push_str("</Types>");
    xml
}

/// A relationships part; `kind` is the suffix of the officeDocument
/// relationship type.
fn rels(entries: &[(&str, &str, &str)]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(DECLARATION);
    xml.push_str(&format!(r#"<Relationships xmlns="{NS_RELS}">"#));
    for (id, kind, target) in entries {
        xml.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{REL_BASE}/{kind}" Target="{target}"/>"#
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn package_rels() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(DECLARATION);
    xml.push_str(&format!(r#"<Relationships xmlns="{NS_RELS}">"#));
    xml.push_str(&format!(
        r#"<Relationship Id="rId1" Type="{REL_BASE}/officeDocument" Target="ppt/presentation.xml"/>"#
    ));
    xml.push_str(concat!(
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" "#,
        r#"Target="docProps/core.xml"/>"#,
    ));
    xml.push_str(&format!(
        r#"<Relationship Id="rId3" Type="{REL_BASE}/extended-properties" Target="docProps/app.xml"/>"#
    ));
    xml.push_str("</Relationships>");
    xml
}

fn presentation_rels(slides: usize) -> String {
    let mut entries: Vec<(String, &str, String)> = vec![
        (
            "rId1".to_string(),
            "slideMaster",
            "slideMasters/slideMaster1.xml".to_string(),
        ),
        ("rId2".to_string(), "theme", "theme/theme1.xml".to_string()),
    ];
    for n in 1..=slides {
        entries.push((format!("rId{}", n + 2), "slide", format!("slides/slide{n}.xml")));
    }
    let borrowed: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|(id, kind, target)| (id.as_str(), *kind, target.as_str()))
        .collect();
    rels(&borrowed)
}

fn presentation(slides: usize) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(DECLARATION);
    xml.push_str(&format!(
        r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#
    ));
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    xml.push_str("<p:sldIdLst>");
    for n in 1..=slides {
        xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            255 + n,
            n + 2
        ));
    }
    xml.push_str("</p:sldIdLst>");
    xml.push_str(&format!(
        r#"<p:sldSz cx="{SLIDE_WIDTH_EMU}" cy="{SLIDE_HEIGHT_EMU}" type="screen4x3"/>"#
    ));
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

fn core_props(title: &str) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title><dc:creator>briefing-export</dc:creator>",
            "</cp:coreProperties>",
        ),
        decl = DECLARATION,
        title = escape(title),
    )
}

fn app_props(slides: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>briefing-export</Application>",
            "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{slides}</Slides>",
            "</Properties>",
        ),
        decl = DECLARATION,
        slides = slides,
    )
}
