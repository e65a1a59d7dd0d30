use serde::{Deserialize, Serialize};

use super::rich_text::RichText;
use super::visual::VisualAttachment;

/// Which slide-deck layout a record binds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Large title, accent subtitle region, stat boxes. No body placeholder.
    Title,
    /// Title placeholder plus body placeholder.
    #[default]
    TitleAndContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub title: String,
    #[serde(default)]
    pub layout: SlideLayout,
    /// Colored box drawn directly under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<RichText>,
    #[serde(default)]
    pub body: RichText,
    #[serde(default)]
    pub visuals: Vec<VisualAttachment>,
}

/// An ordered set of slides. Order defines page and slide order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
