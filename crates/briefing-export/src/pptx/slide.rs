//! Slide parts: shapes bound to a layout plus the relationships they use.

use std::io::{self, Write};

use tracing::warn;

use briefing_core::models::rich_text::RichText;
use briefing_core::models::slide::{SlideLayout, SlideRecord};
use briefing_core::models::visual::{Stat, VisualAttachment};
use briefing_core::theme::{Align, Theme};

use super::chart::{ChartPart, FillUnsupported};
use super::shape::{Bounds, PlaceholderKind, Run, RunStyle, Shape, TextBody, TextParagraph};
use super::template::group_props;
use super::xml::{DECLARATION, NS_A, NS_P, NS_R, escape, inches};
use crate::format::RenderWarning;

const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_CHART: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

// Geometry, in inches.
const TITLE_FRAME: (f64, f64, f64, f64) = (0.5, 0.3, 9.0, 1.0);
const BODY_FULL: (f64, f64, f64, f64) = (0.5, 1.5, 9.0, 5.5);
const BODY_NARROW_WIDTH: f64 = 5.4;
const VISUAL_COLUMN_X: f64 = 6.1;
const VISUAL_COLUMN_WIDTH: f64 = 3.5;
const VISUAL_GAP: f64 = 0.2;
const CHART_HEIGHT: f64 = 2.9;
const CALLOUT_HEIGHT: f64 = 1.3;
const STAT_HEIGHT: f64 = 1.2;

const COVER_TITLE: (f64, f64, f64, f64) = (0.5, 0.8, 9.0, 1.4);
const COVER_SUBTITLE: (f64, f64, f64, f64) = (1.0, 2.4, 8.0, 2.3);
const COVER_STAT_X: [f64; 3] = [0.75, 3.75, 6.75];
const COVER_STAT_Y: f64 = 5.0;
const COVER_STAT_SIZE: (f64, f64) = (2.5, 1.2);

/// Text sizes, hundredths of a point.
const BODY_SIZE: u32 = 1200;
const BODY_SIZE_WITH_VISUALS: u32 = 1000;
const CAPTION_SIZE: u32 = 800;

fn bounds((x, y, cx, cy): (f64, f64, f64, f64)) -> Bounds {
    Bounds {
        x: inches(x),
        y: inches(y),
        cx: inches(cx),
        cy: inches(cy),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub kind: &'static str,
    pub target: String,
    pub external: bool,
}

/// One slide, ready to serialise.
#[derive(Debug, Clone)]
pub struct SlidePart {
    pub number: usize,
    pub layout: SlideLayout,
    pub shapes: Vec<Shape>,
    pub rels: Vec<Relationship>,
    /// Chart parts with their package-wide number (`chartN.xml`).
    pub charts: Vec<(usize, ChartPart)>,
}

impl SlidePart {
    pub fn write_xml<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{DECLARATION}")?;
        write!(
            w,
            r#"<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>"#
        )?;
        write!(w, "{}", group_props())?;
        // Id 1 is the group itself.
        for (offset, shape) in self.shapes.iter().enumerate() {
            shape.write_xml(w, offset as u32 + 2)?;
        }
        write!(w, "</p:spTree></p:cSld>")?;
        write!(w, "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>")
    }

    pub fn write_rels<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{DECLARATION}")?;
        write!(
            w,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#
        )?;
        for rel in &self.rels {
            write!(
                w,
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.id,
                rel.kind,
                escape(&rel.target)
            )?;
            if rel.external {
                write!(w, r#" TargetMode="External""#)?;
            }
            write!(w, "/>")?;
        }
        write!(w, "</Relationships>")
    }
}

/// Builds one [`SlidePart`], allocating relationship ids as shapes need them.
pub struct SlideBuilder<'a> {
    theme: &'a Theme,
    part: SlidePart,
    next_chart: usize,
    warnings: Vec<RenderWarning>,
}

impl<'a> SlideBuilder<'a> {
    /// `first_chart` is the package-wide number the next chart part takes.
    fn new(theme: &'a Theme, number: usize, layout: SlideLayout, first_chart: usize) -> Self {
        let layout_target = match layout {
            SlideLayout::Title => "../slideLayouts/slideLayout1.xml",
            SlideLayout::TitleAndContent => "../slideLayouts/slideLayout2.xml",
        };
        Self {
            theme,
            part: SlidePart {
                number,
                layout,
                shapes: Vec::new(),
                rels: vec![Relationship {
                    id: "rId1".to_string(),
                    kind: REL_LAYOUT,
                    target: layout_target.to_string(),
                    external: false,
                }],
                charts: Vec::new(),
            },
            next_chart: first_chart,
            warnings: Vec::new(),
        }
    }

    pub fn build(record: &SlideRecord, theme: &'a Theme, number: usize, first_chart: usize) -> Self {
        let mut builder = Self::new(theme, number, record.layout, first_chart);
        match record.layout {
            SlideLayout::Title => builder.cover(record),
            SlideLayout::TitleAndContent => builder.content(record),
        }
        builder
    }

    pub fn finish(self) -> (SlidePart, Vec<RenderWarning>) {
        (self.part, self.warnings)
    }

    fn add_rel(&mut self, kind: &'static str, target: String, external: bool) -> String {
        if let Some(existing) = self
            .part
            .rels
            .iter()
            .find(|r| r.kind == kind && r.target == target)
        {
            return existing.id.clone();
        }
        let id = format!("rId{}", self.part.rels.len() + 1);
        self.part.rels.push(Relationship {
            id: id.clone(),
            kind,
            target,
            external,
        });
        id
    }

    fn paragraphs(&mut self, text: &RichText) -> Vec<TextParagraph> {
        let mut paragraphs = Vec::new();
        for line in text.lines() {
            let mut runs = Vec::with_capacity(line.len());
            for span in line {
                let link = span
                    .link
                    .map(|uri| self.add_rel(REL_HYPERLINK, uri, true));
                runs.push(Run {
                    text: span.text,
                    bold: span.bold,
                    link,
                });
            }
            paragraphs.push(TextParagraph { runs });
        }
        paragraphs
    }

    fn plain(text: &str) -> Vec<TextParagraph> {
        vec![TextParagraph {
            runs: vec![Run {
                text: text.to_string(),
                bold: false,
                link: None,
            }],
        }]
    }

    fn title(&mut self, kind: PlaceholderKind, title: &str, frame: (f64, f64, f64, f64)) {
        let theme = self.theme;
        let palette = &theme.palette;
        self.part.shapes.push(Shape::Placeholder {
            kind,
            bounds: Some(bounds(frame)),
            body: TextBody {
                paragraphs: Self::plain(title),
                style: RunStyle {
                    size: Some(if kind == PlaceholderKind::CenteredTitle { 4000 } else { 3200 }),
                    bold: true,
                    color: Some(palette.primary),
                    typeface: None,
                },
                align: Some(Align::Center),
                link_color: None,
            },
        });
    }

    /// Title layout: large title, accent subtitle box, row of stat boxes.
    fn cover(&mut self, record: &SlideRecord) {
        self.title(PlaceholderKind::CenteredTitle, &record.title, COVER_TITLE);

        let mut subtitle = Vec::new();
        if let Some(accent) = &record.accent {
            subtitle.extend(self.paragraphs(accent));
        }
        if !record.body.is_empty() {
            subtitle.extend(self.paragraphs(&record.body));
        }
        if !subtitle.is_empty() {
            let theme = self.theme;
            let palette = &theme.palette;
            self.part.shapes.push(Shape::TextBox {
                name: "Subtitle".to_string(),
                bounds: bounds(COVER_SUBTITLE),
                fill: palette.accent,
                outline: palette.primary,
                body: TextBody {
                    paragraphs: subtitle,
                    style: RunStyle {
                        size: Some(1600),
                        color: Some(palette.white),
                        ..RunStyle::default()
                    },
                    align: Some(Align::Center),
                    link_color: Some(palette.white),
                },
            });
        }

        let stats: Vec<&Stat> = record
            .visuals
            .iter()
            .filter_map(|v| match v {
                VisualAttachment::StatGrid { entries } => Some(entries.iter()),
                _ => None,
            })
            .flatten()
            .collect();
        for (i, stat) in stats.into_iter().enumerate() {
            let x = COVER_STAT_X
                .get(i)
                .copied()
                .unwrap_or(COVER_STAT_X[0] + 3.0 * i as f64);
            self.stat_box(
                i + 1,
                stat,
                bounds((x, COVER_STAT_Y, COVER_STAT_SIZE.0, COVER_STAT_SIZE.1)),
            );
        }

        for visual in &record.visuals {
            if !matches!(visual, VisualAttachment::StatGrid { .. }) {
                warn!(
                    slide = self.part.number,
                    "title layout only places stat grids; skipping visual"
                );
            }
        }
    }

    fn stat_box(&mut self, n: usize, stat: &Stat, frame: Bounds) {
        let theme = self.theme;
        let palette = &theme.palette;
        self.part.shapes.push(Shape::TextBox {
            name: format!("Stat {n}"),
            bounds: frame,
            fill: palette.secondary_accent,
            outline: palette.primary,
            body: TextBody {
                paragraphs: vec![
                    TextParagraph {
                        runs: vec![Run {
                            text: stat.label.clone(),
                            bold: true,
                            link: None,
                        }],
                    },
                    TextParagraph {
                        runs: vec![Run {
                            text: stat.caption.clone(),
                            bold: false,
                            link: None,
                        }],
                    },
                ],
                style: RunStyle {
                    size: Some(1400),
                    color: Some(palette.white),
                    ..RunStyle::default()
                },
                align: Some(Align::Center),
                link_color: None,
            },
        });
    }

    /// Title-and-content layout: title and body placeholders, visuals stacked
    /// in a right-hand column when present.
    fn content(&mut self, record: &SlideRecord) {
        self.title(PlaceholderKind::Title, &record.title, TITLE_FRAME);

        let has_visuals = !record.visuals.is_empty();
        let (x, y, cx, cy) = BODY_FULL;
        let body_frame = if has_visuals {
            (x, y, BODY_NARROW_WIDTH, cy)
        } else {
            (x, y, cx, cy)
        };
        let paragraphs = self.paragraphs(&record.body);
        let theme = self.theme;
        let palette = &theme.palette;
        self.part.shapes.push(Shape::Placeholder {
            kind: PlaceholderKind::Body,
            bounds: Some(bounds(body_frame)),
            body: TextBody {
                paragraphs,
                style: RunStyle {
                    size: Some(if has_visuals {
                        BODY_SIZE_WITH_VISUALS
                    } else {
                        BODY_SIZE
                    }),
                    color: Some(palette.neutral_dark),
                    ..RunStyle::default()
                },
                align: Some(Align::Left),
                link_color: Some(palette.primary),
            },
        });

        let mut top = y;
        for (i, visual) in record.visuals.iter().enumerate() {
            let height = match visual {
                VisualAttachment::BarChart(_) => CHART_HEIGHT,
                VisualAttachment::CalloutBox { .. } => CALLOUT_HEIGHT,
                VisualAttachment::StatGrid { entries } => STAT_HEIGHT * entries.len() as f64,
            };
            let frame = (VISUAL_COLUMN_X, top, VISUAL_COLUMN_WIDTH, height);
            self.visual(i + 1, visual, frame);
            top += height + VISUAL_GAP;
        }
    }

    fn visual(&mut self, n: usize, visual: &VisualAttachment, frame: (f64, f64, f64, f64)) {
        match visual {
            VisualAttachment::BarChart(chart) => {
                let mut part = ChartPart::clustered_columns(chart)
                    .with_text_color(self.theme.palette.neutral_dark);
                self.apply_series_fills(&mut part);
                let number = self.next_chart;
                self.next_chart += 1;
                let rel_id = self.add_rel(REL_CHART, format!("../charts/chart{number}.xml"), false);
                self.part.shapes.push(Shape::Chart {
                    name: format!("Chart {n}"),
                    bounds: bounds(frame),
                    rel_id,
                });
                self.part.charts.push((number, part));
            }
            VisualAttachment::CalloutBox {
                text,
                fill,
                monospace,
            } => {
                let paragraphs = self.paragraphs(text);
                let theme = self.theme;
                let palette = &theme.palette;
                let style = if *monospace {
                    RunStyle {
                        size: Some(CAPTION_SIZE),
                        color: Some(palette.neutral_dark),
                        typeface: Some("Courier New"),
                        ..RunStyle::default()
                    }
                } else {
                    RunStyle {
                        size: Some(BODY_SIZE),
                        color: Some(palette.white),
                        ..RunStyle::default()
                    }
                };
                self.part.shapes.push(Shape::TextBox {
                    name: format!("Callout {n}"),
                    bounds: bounds(frame),
                    fill: theme.color(*fill),
                    outline: palette.primary,
                    body: TextBody {
                        paragraphs,
                        style,
                        align: Some(if *monospace { Align::Left } else { Align::Center }),
                        link_color: style.color,
                    },
                });
            }
            VisualAttachment::StatGrid { entries } => {
                let (x, y, cx, _) = frame;
                for (i, stat) in entries.iter().enumerate() {
                    let top = y + i as f64 * STAT_HEIGHT;
                    self.stat_box(i + 1, stat, bounds((x, top, cx, STAT_HEIGHT - 0.1)));
                }
            }
        }
    }

    /// Per-series fills are best effort: a series that cannot take one keeps
    /// the default styling and is reported.
    fn apply_series_fills(&mut self, part: &mut ChartPart) {
        let names: Vec<String> = part.series_names().map(str::to_string).collect();
        for (idx, name) in names.into_iter().enumerate() {
            let result = match self.theme.palette.series(idx) {
                Some(color) => part.set_series_fill(idx, color),
                None => Err(FillUnsupported {
                    reason: format!("palette has no fill for series {}", idx + 1),
                }),
            };
            if let Err(unsupported) = result {
                warn!(
                    slide = self.part.number,
                    series = %name,
                    reason = %unsupported,
                    "chart series keeps default styling"
                );
                self.warnings.push(RenderWarning::SeriesFillUnsupported {
                    slide: self.part.number,
                    series: name,
                    reason: unsupported.reason,
                });
            }
        }
    }
}
