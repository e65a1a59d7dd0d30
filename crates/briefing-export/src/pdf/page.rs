use briefing_core::theme::{Rgb, Typeface};

/// Page geometry for the flowable document, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    /// Applied uniformly on all four sides.
    pub margin: f32,
}

impl PageSetup {
    /// US Letter with one-inch margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 72.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn frame_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

/// A positioned drawing instruction. Coordinates are PDF user space
/// (origin bottom-left, points).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A run of text; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        face: Typeface,
        size: f32,
        color: Rgb,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    /// Clickable area opening `uri`.
    Link {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        uri: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Text of every text op, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The pages one slide occupies. A group always starts on a fresh page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup {
    pub title: String,
    pub pages: Vec<Page>,
}

/// A laid-out document, ready to encode.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDocument {
    pub title: String,
    pub setup: PageSetup,
    pub groups: Vec<PageGroup>,
}

impl FlowDocument {
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.groups.iter().flat_map(|g| g.pages.iter())
    }

    pub fn page_count(&self) -> usize {
        self.groups.iter().map(|g| g.pages.len()).sum()
    }
}
