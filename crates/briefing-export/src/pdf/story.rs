use briefing_core::models::rich_text::RichText;
use briefing_core::models::slide::SlideRecord;
use briefing_core::models::visual::{Stat, VisualAttachment};
use briefing_core::theme::{PaletteColor, Theme};

use super::flow::{Block, ChartDrawing, Paragraph, Table};
use super::page::Stroke;

/// Width of accent and callout boxes.
const BOX_WIDTH: f32 = 432.0;
/// Accent boxes hold at least this much height (1.5 in).
const ACCENT_MIN_HEIGHT: f32 = 108.0;
const STAT_COLUMN: f32 = 108.0;
const VISUAL_GAP: f32 = 14.4;
const SLIDE_TRAILER: f32 = 21.6;

/// Turn one slide into the blocks that make up its page group.
pub fn slide_story(slide: &SlideRecord, theme: &Theme, frame_width: f32) -> Vec<Block> {
    let mut blocks = vec![Block::Paragraph(Paragraph::plain(
        &slide.title,
        &theme.title,
        theme,
        frame_width,
    ))];

    if let Some(accent) = &slide.accent {
        let table = Table::single(
            accent,
            &theme.subtitle,
            theme,
            BOX_WIDTH,
            theme.palette.accent,
            border(theme),
        )
        .with_min_height(ACCENT_MIN_HEIGHT);
        blocks.push(Block::Table(table));
        blocks.push(Block::Spacer(VISUAL_GAP));
    }

    if !slide.body.is_empty() {
        blocks.push(Block::Paragraph(Paragraph::new(
            &slide.body,
            &theme.body,
            theme,
            frame_width,
        )));
    }

    for visual in &slide.visuals {
        visual_blocks(visual, theme, &mut blocks);
    }

    blocks.push(Block::Spacer(SLIDE_TRAILER));
    blocks
}

fn visual_blocks(visual: &VisualAttachment, theme: &Theme, blocks: &mut Vec<Block>) {
    match visual {
        VisualAttachment::BarChart(chart) => {
            blocks.push(Block::Spacer(VISUAL_GAP));
            blocks.push(Block::Chart(ChartDrawing::new(chart, theme)));
        }
        VisualAttachment::StatGrid { entries } => {
            blocks.push(Block::Spacer(VISUAL_GAP));
            let cells: Vec<RichText> = entries.iter().map(stat_cell).collect();
            let grid = Stroke {
                color: theme.palette.primary,
                width: 0.5,
            };
            blocks.push(Block::Table(Table::row(
                &cells,
                STAT_COLUMN,
                &theme.callout,
                theme,
                theme.palette.secondary_accent,
                border(theme),
                Some(grid),
            )));
        }
        VisualAttachment::CalloutBox {
            text,
            fill,
            monospace,
        } => {
            let style = if *monospace {
                &theme.caption
            } else {
                &theme.callout
            };
            blocks.push(Block::Table(Table::single(
                text,
                style,
                theme,
                BOX_WIDTH,
                theme.color(*fill),
                border(theme),
            )));
        }
    }
}

fn border(theme: &Theme) -> Stroke {
    Stroke {
        color: theme.color(PaletteColor::Primary),
        width: 1.0,
    }
}

fn stat_cell(stat: &Stat) -> RichText {
    RichText::new(format!(
        "{}<br/>{}",
        escape(&stat.label),
        escape(&stat.caption)
    ))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
