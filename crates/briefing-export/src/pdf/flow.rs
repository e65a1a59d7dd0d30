//! Flowable blocks and the paginator that places them.
//!
//! Blocks are measured up front against a fixed width, then stacked top
//! to bottom inside the page frame. Paragraphs split between lines when a
//! page fills up; tables and drawings move whole to the next page.

use std::collections::VecDeque;

use tracing::warn;

use briefing_core::models::rich_text::{Line, RichText, Span};
use briefing_core::models::visual::BarChart;
use briefing_core::theme::{Align, Rgb, TextStyle, Theme, Typeface};

use super::metrics::text_width;
use super::page::{DrawOp, Page, PageSetup, Stroke};

const CELL_PAD_X: f32 = 6.0;
const CELL_PAD_Y: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
struct Fragment {
    text: String,
    face: Typeface,
    width: f32,
    link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct LaidLine {
    fragments: Vec<Fragment>,
    width: f32,
}

impl LaidLine {
    fn is_blank(&self) -> bool {
        self.fragments.iter().all(|f| f.text.trim().is_empty())
    }

    fn push(&mut self, text: &str, face: Typeface, width: f32, link: &Option<String>) {
        self.width += width;
        match self.fragments.last_mut() {
            Some(last) if last.face == face && last.link == *link => {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.fragments.push(Fragment {
                text: text.to_string(),
                face,
                width,
                link: link.clone(),
            }),
        }
    }

    fn trim_end(&mut self, size: f32) {
        while let Some(last) = self.fragments.last_mut() {
            let trimmed = last.text.trim_end_matches(' ');
            if trimmed.len() == last.text.len() {
                break;
            }
            if trimmed.is_empty() {
                self.width -= last.width;
                self.fragments.pop();
                continue;
            }
            let width = text_width(last.face, trimmed, size);
            self.width -= last.width - width;
            last.text.truncate(trimmed.len());
            last.width = width;
            break;
        }
    }
}

/// Text wrapped to a fixed width with one resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    lines: Vec<LaidLine>,
    size: f32,
    leading: f32,
    color: Rgb,
    link_color: Rgb,
    align: Align,
    space_after: f32,
    width: f32,
}

impl Paragraph {
    pub fn new(text: &RichText, style: &TextStyle, theme: &Theme, width: f32) -> Self {
        Self::from_lines(&text.lines(), style, theme, width)
    }

    /// A paragraph of unstyled text (no markup is interpreted).
    pub fn plain(text: &str, style: &TextStyle, theme: &Theme, width: f32) -> Self {
        let line = vec![Span {
            text: text.to_string(),
            bold: false,
            link: None,
        }];
        Self::from_lines(&[line], style, theme, width)
    }

    fn from_lines(lines: &[Line], style: &TextStyle, theme: &Theme, width: f32) -> Self {
        Self {
            lines: lines.iter().flat_map(|l| wrap(l, style, width)).collect(),
            size: style.size,
            leading: style.leading,
            color: theme.color(style.color),
            link_color: theme.palette.primary,
            align: style.align,
            space_after: style.space_after,
            width,
        }
    }

    pub fn without_space_after(mut self) -> Self {
        self.space_after = 0.0;
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn text_height(&self) -> f32 {
        self.lines.len() as f32 * self.leading
    }

    pub fn height(&self) -> f32 {
        self.text_height() + self.space_after
    }

    fn split(&self, available: f32) -> Option<(Paragraph, Paragraph)> {
        let fit = (available / self.leading).floor() as usize;
        if fit == 0 || fit >= self.lines.len() {
            return None;
        }
        let head = Paragraph {
            lines: self.lines[..fit].to_vec(),
            space_after: 0.0,
            ..self.clone()
        };
        let tail = Paragraph {
            lines: self.lines[fit..].to_vec(),
            ..self.clone()
        };
        Some((head, tail))
    }

    fn draw(&self, page: &mut Page, x: f32, top: f32) {
        let descent = self.size * 0.2;
        let mut links = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            let baseline = top - (i as f32 + 1.0) * self.leading + descent;
            let mut cursor = match self.align {
                Align::Left => x,
                Align::Center => x + (self.width - line.width) / 2.0,
            };
            for frag in &line.fragments {
                let color = if frag.link.is_some() {
                    self.link_color
                } else {
                    self.color
                };
                page.ops.push(DrawOp::Text {
                    x: cursor,
                    y: baseline,
                    face: frag.face,
                    size: self.size,
                    color,
                    text: frag.text.clone(),
                });
                if let Some(uri) = &frag.link {
                    links.push(DrawOp::Link {
                        x: cursor,
                        y: baseline - descent,
                        width: frag.width,
                        height: self.size,
                        uri: uri.clone(),
                    });
                }
                cursor += frag.width;
            }
        }
        page.ops.extend(links);
    }
}

/// Break one hard line into lines no wider than `width`.
///
/// Leading spaces survive on the hard line (diagrams rely on them) but are
/// dropped at the start of a soft-wrapped continuation. A blank hard line
/// yields one empty line.
fn wrap(line: &Line, style: &TextStyle, width: f32) -> Vec<LaidLine> {
    let mut out = Vec::new();
    let mut current = LaidLine::default();
    let mut continuation = false;

    for span in line {
        let face = if span.bold {
            style.typeface.bold()
        } else {
            style.typeface
        };
        for atom in atoms(&span.text) {
            let w = text_width(face, atom, style.size);
            if atom.starts_with(' ') {
                if continuation && current.fragments.is_empty() {
                    continue;
                }
                current.push(atom, face, w, &span.link);
                continue;
            }
            if current.width + w > width && !current.is_blank() {
                current.trim_end(style.size);
                out.push(std::mem::take(&mut current));
                continuation = true;
            }
            current.push(atom, face, w, &span.link);
        }
    }

    current.trim_end(style.size);
    out.push(current);
    out
}

/// Split into alternating runs of spaces and non-spaces.
fn atoms(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, ch) in text.char_indices() {
        let space = ch == ' ';
        match in_space {
            Some(prev) if prev != space => {
                out.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// A one-row table of filled, bordered cells, centered in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    col_widths: Vec<f32>,
    cells: Vec<Paragraph>,
    fill: Rgb,
    border: Stroke,
    inner_grid: Option<Stroke>,
    min_height: f32,
}

impl Table {
    /// A single-cell box spanning `width`.
    pub fn single(
        text: &RichText,
        style: &TextStyle,
        theme: &Theme,
        width: f32,
        fill: Rgb,
        border: Stroke,
    ) -> Self {
        Self::row(std::slice::from_ref(text), width, style, theme, fill, border, None)
    }

    /// One row of equal-width cells.
    pub fn row(
        cells: &[RichText],
        col_width: f32,
        style: &TextStyle,
        theme: &Theme,
        fill: Rgb,
        border: Stroke,
        inner_grid: Option<Stroke>,
    ) -> Self {
        let inner = col_width - 2.0 * CELL_PAD_X;
        Self {
            col_widths: vec![col_width; cells.len()],
            cells: cells
                .iter()
                .map(|c| Paragraph::new(c, style, theme, inner).without_space_after())
                .collect(),
            fill,
            border,
            inner_grid,
            min_height: 0.0,
        }
    }

    pub fn with_min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    pub fn height(&self) -> f32 {
        let content = self
            .cells
            .iter()
            .map(|c| c.text_height())
            .fold(0.0, f32::max);
        (content + 2.0 * CELL_PAD_Y).max(self.min_height)
    }

    fn draw(&self, page: &mut Page, frame_x: f32, frame_width: f32, top: f32) {
        let width = self.width();
        let height = self.height();
        let x = frame_x + (frame_width - width) / 2.0;

        page.ops.push(DrawOp::Rect {
            x,
            y: top - height,
            width,
            height,
            fill: Some(self.fill),
            stroke: Some(self.border),
        });

        if let Some(grid) = self.inner_grid {
            let mut cx = x;
            for w in &self.col_widths[..self.col_widths.len().saturating_sub(1)] {
                cx += w;
                page.ops.push(DrawOp::Line {
                    from: (cx, top),
                    to: (cx, top - height),
                    stroke: grid,
                });
            }
        }

        let mut cx = x;
        for (cell, w) in self.cells.iter().zip(&self.col_widths) {
            let cell_top = top - (height - cell.text_height()) / 2.0;
            cell.draw(page, cx + CELL_PAD_X, cell_top);
            cx += w;
        }
    }
}

/// A grouped vertical bar chart inside a fixed-size drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDrawing {
    chart: BarChart,
    fills: Vec<Rgb>,
    axis: Stroke,
    label_color: Rgb,
}

impl ChartDrawing {
    /// Drawing box: 4 in × 2 in.
    pub const WIDTH: f32 = 288.0;
    pub const HEIGHT: f32 = 144.0;
    /// Chart box inside the drawing: 3.8 in × 1.8 in.
    const CHART_WIDTH: f32 = 273.6;
    const CHART_HEIGHT: f32 = 129.6;
    /// Room reserved for value labels (left) and category labels (below).
    const AXIS_GUTTER_X: f32 = 28.0;
    const AXIS_GUTTER_Y: f32 = 14.0;
    const LABEL_SIZE: f32 = 8.0;
    const VALUE_TICKS: u32 = 5;

    pub fn new(chart: &BarChart, theme: &Theme) -> Self {
        let palette = &theme.palette;
        let fills = (0..4).filter_map(|i| palette.series(i)).collect();
        Self {
            chart: chart.clone(),
            fills,
            axis: Stroke {
                color: palette.neutral_dark,
                width: 0.5,
            },
            label_color: palette.neutral_dark,
        }
    }

    fn draw(&self, page: &mut Page, frame_x: f32, frame_width: f32, top: f32) {
        let left = frame_x + (frame_width - Self::WIDTH) / 2.0;
        let bottom = top - Self::HEIGHT;
        let plot_x = left + Self::AXIS_GUTTER_X;
        let plot_y = bottom + Self::AXIS_GUTTER_Y;
        let plot_w = Self::CHART_WIDTH - Self::AXIS_GUTTER_X;
        let plot_h = Self::CHART_HEIGHT - Self::AXIS_GUTTER_Y;
        let max = self.chart.axis_max().max(f64::EPSILON);

        for tick in 0..=Self::VALUE_TICKS {
            let value = max * f64::from(tick) / f64::from(Self::VALUE_TICKS);
            let y = plot_y + (value / max) as f32 * plot_h;
            let label = format!("{value:.0}");
            let w = text_width(Typeface::Sans, &label, Self::LABEL_SIZE);
            page.ops.push(DrawOp::Line {
                from: (plot_x - 3.0, y),
                to: (plot_x, y),
                stroke: self.axis,
            });
            self.label(page, plot_x - 5.0 - w, y - Self::LABEL_SIZE * 0.35, label);
        }

        page.ops.push(DrawOp::Line {
            from: (plot_x, plot_y),
            to: (plot_x, plot_y + plot_h),
            stroke: self.axis,
        });
        page.ops.push(DrawOp::Line {
            from: (plot_x, plot_y),
            to: (plot_x + plot_w, plot_y),
            stroke: self.axis,
        });

        let categories = self.chart.categories.len().max(1);
        let group_w = plot_w / categories as f32;
        let bar_w = group_w * 0.8 / self.chart.series.len().max(1) as f32;

        for (ci, category) in self.chart.categories.iter().enumerate() {
            let group_x = plot_x + ci as f32 * group_w;
            for (si, series) in self.chart.series.iter().enumerate() {
                let value = series.values.get(ci).copied().unwrap_or(0.0).clamp(0.0, max);
                if value <= 0.0 {
                    continue;
                }
                page.ops.push(DrawOp::Rect {
                    x: group_x + group_w * 0.1 + si as f32 * bar_w,
                    y: plot_y,
                    width: bar_w,
                    height: (value / max) as f32 * plot_h,
                    fill: self.fills.get(si % self.fills.len().max(1)).copied(),
                    stroke: None,
                });
            }
            let w = text_width(Typeface::Sans, category, Self::LABEL_SIZE);
            self.label(
                page,
                group_x + (group_w - w) / 2.0,
                plot_y - Self::LABEL_SIZE - 2.0,
                category.clone(),
            );
        }
    }

    fn label(&self, page: &mut Page, x: f32, y: f32, text: String) {
        page.ops.push(DrawOp::Text {
            x,
            y,
            face: Typeface::Sans,
            size: Self::LABEL_SIZE,
            color: self.label_color,
            text,
        });
    }
}

/// One unit of the story.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Chart(ChartDrawing),
    Spacer(f32),
}

impl Block {
    pub fn height(&self) -> f32 {
        match self {
            Block::Paragraph(p) => p.height(),
            Block::Table(t) => t.height(),
            Block::Chart(_) => ChartDrawing::HEIGHT,
            Block::Spacer(h) => *h,
        }
    }

    fn split(&self, available: f32) -> Option<(Block, Block)> {
        match self {
            Block::Paragraph(p) => p
                .split(available)
                .map(|(head, tail)| (Block::Paragraph(head), Block::Paragraph(tail))),
            _ => None,
        }
    }

    fn draw(&self, page: &mut Page, setup: &PageSetup, top: f32) {
        let x = setup.margin;
        let width = setup.frame_width();
        match self {
            Block::Paragraph(p) => p.draw(page, x, top),
            Block::Table(t) => t.draw(page, x, width, top),
            Block::Chart(c) => c.draw(page, x, width, top),
            Block::Spacer(_) => {}
        }
    }
}

/// Place `blocks` onto as many pages as they need, starting on a fresh page.
pub fn paginate(blocks: Vec<Block>, setup: &PageSetup) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut page = Page::default();
    let mut cursor = setup.frame_top();
    let mut queue: VecDeque<Block> = blocks.into();

    while let Some(block) = queue.pop_front() {
        let height = block.height();
        let available = cursor - setup.frame_bottom();

        if height <= available {
            block.draw(&mut page, setup, cursor);
            cursor -= height;
            continue;
        }

        if let Block::Spacer(_) = block {
            // A spacer that does not fit just ends the page.
            if !page.is_empty() {
                pages.push(std::mem::take(&mut page));
                cursor = setup.frame_top();
            }
            continue;
        }

        if let Some((head, tail)) = block.split(available) {
            head.draw(&mut page, setup, cursor);
            pages.push(std::mem::take(&mut page));
            cursor = setup.frame_top();
            queue.push_front(tail);
            continue;
        }

        if page.is_empty() {
            warn!(
                height,
                frame = setup.frame_height(),
                "block taller than the page frame; placing it anyway"
            );
            block.draw(&mut page, setup, cursor);
            cursor -= height;
            continue;
        }

        pages.push(std::mem::take(&mut page));
        cursor = setup.frame_top();
        queue.push_front(block);
    }

    if !page.is_empty() || pages.is_empty() {
        pages.push(page);
    }
    pages
}
