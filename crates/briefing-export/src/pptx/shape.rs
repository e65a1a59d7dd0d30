//! Shapes placed on a slide and their DrawingML.

use std::io::{self, Write};

use briefing_core::theme::{Align, Rgb};

use super::xml::{NS_C, escape};

/// Position and size in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Bounds {
    fn write_xfrm<W: Write>(&self, w: &mut W, tag: &str) -> io::Result<()> {
        write!(
            w,
            r#"<{tag}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
            self.x, self.y, self.cx, self.cy
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// Relationship id of an external hyperlink.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextParagraph {
    pub runs: Vec<Run>,
}

/// Character formatting applied to every run in a text body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunStyle {
    /// Hundredths of a point.
    pub size: Option<u32>,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub typeface: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBody {
    pub paragraphs: Vec<TextParagraph>,
    pub style: RunStyle,
    pub align: Option<Align>,
    /// Color for hyperlink runs; falls back to the run color.
    pub link_color: Option<Rgb>,
}

/// Shrink-on-overflow settings for `a:normAutofit`, in thousandths of a
/// percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autofit {
    pub font_scale: u32,
    pub line_reduction: u32,
}

impl Autofit {
    const FULL: u32 = 100_000;
    const STEP: u32 = 2_500;
    const MIN_SCALE: u32 = 25_000;
    const LINE_REDUCTION: u32 = 10_000;

    /// Text fits at its own size.
    pub fn none() -> Self {
        Self {
            font_scale: Self::FULL,
            line_reduction: 0,
        }
    }

    pub fn is_scaled(&self) -> bool {
        self.font_scale < Self::FULL
    }

    fn write_xml<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.is_scaled() {
            write!(
                w,
                r#"<a:normAutofit fontScale="{}" lnSpcReduction="{}"/>"#,
                self.font_scale, self.line_reduction
            )
        } else {
            write!(w, "<a:normAutofit/>")
        }
    }
}

/// Size assumed for runs without an explicit one.
const DEFAULT_SIZE: u32 = 1800;
/// Default `a:bodyPr` insets: 0.1 in left/right, 0.05 in top/bottom.
const INSET_X_EMU: i64 = 91_440;
const INSET_Y_EMU: i64 = 45_720;
const EMU_PER_POINT: f64 = 12_700.0;
const LINE_SPACING: f64 = 1.2;

impl TextBody {
    /// Font scale at which the wrapped text fits inside `bounds`.
    ///
    /// Line counts come from an average glyph width (half an em, 0.6 em
    /// for Courier), so the result is an estimate that errs on the
    /// generous side for proportional text.
    pub fn autofit(&self, bounds: Bounds) -> Autofit {
        let width = (bounds.cx - 2 * INSET_X_EMU) as f64 / EMU_PER_POINT;
        let height = (bounds.cy - 2 * INSET_Y_EMU) as f64 / EMU_PER_POINT;
        if self.estimated_height(width, 1.0, 1.0) <= height {
            return Autofit::none();
        }

        let spacing = f64::from(Autofit::FULL - Autofit::LINE_REDUCTION) / f64::from(Autofit::FULL);
        let mut scale = Autofit::FULL - Autofit::STEP;
        while scale > Autofit::MIN_SCALE
            && self.estimated_height(width, f64::from(scale) / f64::from(Autofit::FULL), spacing)
                > height
        {
            scale -= Autofit::STEP;
        }
        Autofit {
            font_scale: scale,
            line_reduction: Autofit::LINE_REDUCTION,
        }
    }

    /// Height in points of the wrapped paragraphs at `scale`.
    fn estimated_height(&self, width: f64, scale: f64, spacing: f64) -> f64 {
        let size = f64::from(self.style.size.unwrap_or(DEFAULT_SIZE)) / 100.0 * scale;
        let em = match self.style.typeface {
            Some(face) if face.starts_with("Courier") => 0.6,
            _ => 0.5,
        };
        let per_line = (width / (size * em)).floor().max(1.0);
        let lines: f64 = self
            .paragraphs
            .iter()
            .map(|p| {
                let chars: usize = p.runs.iter().map(|r| r.text.chars().count()).sum();
                (chars as f64 / per_line).ceil().max(1.0)
            })
            .sum();
        lines * size * LINE_SPACING * spacing
    }

    fn write_paragraphs<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let empty = [TextParagraph::default()];
        let paragraphs = if self.paragraphs.is_empty() {
            &empty[..]
        } else {
            &self.paragraphs[..]
        };

        for paragraph in paragraphs {
            write!(w, "<a:p>")?;
            if let Some(Align::Center) = self.align {
                write!(w, r#"<a:pPr algn="ctr"/>"#)?;
            }
            for run in &paragraph.runs {
                write!(w, "<a:r>")?;
                self.write_run_props(w, "a:rPr", run.bold, run.link.as_deref())?;
                write!(w, "<a:t>{}</a:t></a:r>", escape(&run.text))?;
            }
            self.write_run_props(w, "a:endParaRPr", false, None)?;
            write!(w, "</a:p>")?;
        }
        Ok(())
    }

    fn write_run_props<W: Write>(
        &self,
        w: &mut W,
        tag: &str,
        bold: bool,
        link: Option<&str>,
    ) -> io::Result<()> {
        write!(w, r#"<{tag} lang="en-US""#)?;
        if let Some(size) = self.style.size {
            write!(w, r#" sz="{size}""#)?;
        }
        if bold || self.style.bold {
            write!(w, r#" b="1""#)?;
        }
        write!(w, r#" dirty="0">"#)?;

        let color = match link {
            Some(_) => self.link_color.or(self.style.color),
            None => self.style.color,
        };
        if let Some(color) = color {
            write!(w, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
        }
        if let Some(face) = self.style.typeface {
            write!(w, r#"<a:latin typeface="{}"/>"#, escape(face))?;
        }
        if let Some(rel_id) = link {
            write!(w, r#"<a:hlinkClick r:id="{rel_id}"/>"#)?;
        }
        write!(w, "</{tag}>")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    CenteredTitle,
    Body,
}

impl PlaceholderKind {
    fn ph(self) -> &'static str {
        match self {
            PlaceholderKind::Title => r#"<p:ph type="title"/>"#,
            PlaceholderKind::CenteredTitle => r#"<p:ph type="ctrTitle"/>"#,
            PlaceholderKind::Body => r#"<p:ph type="body" idx="1"/>"#,
        }
    }

    fn name(self) -> &'static str {
        match self {
            PlaceholderKind::Title | PlaceholderKind::CenteredTitle => "Title",
            PlaceholderKind::Body => "Content Placeholder",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Bound to a layout placeholder. `bounds` overrides the inherited frame.
    Placeholder {
        kind: PlaceholderKind,
        bounds: Option<Bounds>,
        body: TextBody,
    },
    /// A free-standing text box with a solid fill and outline.
    TextBox {
        name: String,
        bounds: Bounds,
        fill: Rgb,
        outline: Rgb,
        body: TextBody,
    },
    /// A graphic frame referencing a chart part.
    Chart {
        name: String,
        bounds: Bounds,
        rel_id: String,
    },
}

/// Outline width for text boxes: 1 pt.
const OUTLINE_EMU: u32 = 12_700;

impl Shape {
    pub fn write_xml<W: Write>(&self, w: &mut W, id: u32) -> io::Result<()> {
        match self {
            Shape::Placeholder { kind, bounds, body } => {
                write!(w, "<p:sp><p:nvSpPr>")?;
                write!(w, r#"<p:cNvPr id="{id}" name="{} {id}"/>"#, kind.name())?;
                write!(w, r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#)?;
                write!(w, "<p:nvPr>{}</p:nvPr></p:nvSpPr>", kind.ph())?;
                write!(w, "<p:spPr>")?;
                if let Some(bounds) = bounds {
                    bounds.write_xfrm(w, "a:xfrm")?;
                }
                write!(w, "</p:spPr>")?;
                write!(w, "<p:txBody><a:bodyPr>")?;
                bounds
                    .map_or_else(Autofit::none, |b| body.autofit(b))
                    .write_xml(w)?;
                write!(w, "</a:bodyPr><a:lstStyle/>")?;
                body.write_paragraphs(w)?;
                write!(w, "</p:txBody></p:sp>")
            }
            Shape::TextBox {
                name,
                bounds,
                fill,
                outline,
                body,
            } => {
                write!(w, "<p:sp><p:nvSpPr>")?;
                write!(w, r#"<p:cNvPr id="{id}" name="{}"/>"#, escape(name))?;
                write!(w, r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#)?;
                write!(w, "<p:spPr>")?;
                bounds.write_xfrm(w, "a:xfrm")?;
                write!(w, r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#)?;
                write!(w, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, fill.to_hex())?;
                write!(
                    w,
                    r#"<a:ln w="{OUTLINE_EMU}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    outline.to_hex()
                )?;
                write!(w, "</p:spPr>")?;
                write!(w, r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="ctr">"#)?;
                body.autofit(*bounds).write_xml(w)?;
                write!(w, "</a:bodyPr><a:lstStyle/>")?;
                body.write_paragraphs(w)?;
                write!(w, "</p:txBody></p:sp>")
            }
            Shape::Chart {
                name,
                bounds,
                rel_id,
            } => {
                write!(w, "<p:graphicFrame><p:nvGraphicFramePr>")?;
                write!(w, r#"<p:cNvPr id="{id}" name="{}"/>"#, escape(name))?;
                write!(w, "<p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr>")?;
                bounds.write_xfrm(w, "p:xfrm")?;
                write!(w, r#"<a:graphic><a:graphicData uri="{NS_C}">"#)?;
                write!(w, r#"<c:chart xmlns:c="{NS_C}" r:id="{rel_id}"/>"#)?;
                write!(w, "</a:graphicData></a:graphic></p:graphicFrame>")
            }
        }
    }
}
