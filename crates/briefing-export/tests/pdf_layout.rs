#![cfg(feature = "pdf")]

use briefing_core::catalog::{case_study_chart, ccsp_deck};
use briefing_core::models::rich_text::RichText;
use briefing_core::models::slide::{Deck, SlideLayout, SlideRecord};
use briefing_core::models::visual::VisualAttachment;
use briefing_core::theme::{Theme, Typeface};
use briefing_export::error::ExportError;
use briefing_export::pdf::flow::{Block, Paragraph, Table, paginate};
use briefing_export::pdf::metrics::{text_width, win_ansi};
use briefing_export::pdf::page::{DrawOp, PageSetup, Stroke};
use briefing_export::pdf::{layout, render_pdf};

fn numbered_lines(n: usize) -> RichText {
    let lines: Vec<String> = (1..=n).map(|i| format!("line {i}")).collect();
    RichText::new(lines.join("<br/>"))
}

#[test]
fn every_slide_gets_its_own_page_group_led_by_its_title() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let doc = layout(&deck, &theme, &PageSetup::letter());

    assert_eq!(doc.groups.len(), 10);
    for (group, slide) in doc.groups.iter().zip(&deck.slides) {
        assert_eq!(group.title, slide.title);
        let first = group.pages[0].ops.first().expect("page has ops");
        match first {
            DrawOp::Text { text, face, .. } => {
                assert!(slide.title.starts_with(text.as_str()), "{text} vs {}", slide.title);
                assert_eq!(*face, Typeface::SansBold);
            }
            other => panic!("expected title text first, got {other:?}"),
        }
    }
}

#[test]
fn case_study_slide_draws_chart_bars_in_series_colors() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let doc = layout(&deck, &theme, &PageSetup::letter());

    let fills: Vec<_> = doc.groups[6]
        .pages
        .iter()
        .flat_map(|p| p.ops.iter())
        .filter_map(|op| match op {
            DrawOp::Rect {
                fill: Some(fill),
                stroke: None,
                ..
            } => Some(*fill),
            _ => None,
        })
        .collect();

    // Five of the sixteen values are zero and draw no bar.
    assert_eq!(fills.len(), 16 - 5);
    assert!(fills.contains(&theme.palette.primary));
    assert!(fills.contains(&theme.palette.secondary_accent));
}

#[test]
fn bars_above_the_declared_max_stay_inside_the_plot() {
    let mut chart = case_study_chart();
    chart.series[0].values[3] = 150.0;
    let deck = Deck {
        title: "Overshoot".to_string(),
        slides: vec![SlideRecord {
            title: "Chart".to_string(),
            layout: SlideLayout::TitleAndContent,
            accent: None,
            body: RichText::new("One value above the axis"),
            visuals: vec![VisualAttachment::BarChart(chart)],
        }],
    };
    let doc = layout(&deck, &Theme::ccsp(), &PageSetup::letter());

    let heights: Vec<f32> = doc.groups[0]
        .pages
        .iter()
        .flat_map(|p| p.ops.iter())
        .filter_map(|op| match op {
            DrawOp::Rect {
                fill: Some(_),
                stroke: None,
                height,
                ..
            } => Some(*height),
            _ => None,
        })
        .collect();

    let plot_height = 129.6_f32 - 14.0;
    let tallest = heights.iter().copied().fold(0.0, f32::max);
    assert!((tallest - plot_height).abs() < 1e-3, "{tallest}");
    // Planning stays at 100, two thirds of the raised axis.
    assert!(heights.iter().any(|h| (h - plot_height * 100.0 / 150.0).abs() < 1e-2));
}

#[test]
fn stat_cells_use_plain_callout_text() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let doc = layout(&deck, &theme, &PageSetup::letter());

    let labels: Vec<(&str, Typeface)> = doc.groups[0]
        .pages
        .iter()
        .flat_map(|p| p.ops.iter())
        .filter_map(|op| match op {
            DrawOp::Text {
                text, face, color, ..
            } if ["High", "Critical", "Strategic"].contains(&text.as_str()) => {
                assert_eq!(*color, theme.palette.white);
                Some((text.as_str(), *face))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        labels,
        vec![
            ("High", Typeface::Sans),
            ("Critical", Typeface::Sans),
            ("Strategic", Typeface::Sans),
        ]
    );
}

#[test]
fn hyperlinks_become_link_ops() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let doc = layout(&deck, &theme, &PageSetup::letter());

    let links: Vec<_> = doc.groups[9]
        .pages
        .iter()
        .flat_map(|p| p.ops.iter())
        .filter_map(|op| match op {
            DrawOp::Link { uri, .. } => Some(uri.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(links, vec!["http://www.isc2.org"]);
}

#[test]
fn long_paragraph_splits_at_line_boundaries() {
    let theme = Theme::ccsp();
    let setup = PageSetup::letter();
    let paragraph = Paragraph::new(&numbered_lines(100), &theme.body, &theme, setup.frame_width());
    assert_eq!(paragraph.line_count(), 100);

    let pages = paginate(vec![Block::Paragraph(paragraph)], &setup);
    assert_eq!(pages.len(), 2);
    // 648 pt frame / 12 pt leading.
    assert_eq!(pages[0].texts().count(), 54);
    assert_eq!(pages[1].texts().count(), 46);
    assert_eq!(pages[1].texts().next(), Some("line 55"));
}

#[test]
fn tables_move_whole_to_the_next_page() {
    let theme = Theme::ccsp();
    let setup = PageSetup::letter();
    let filler = Paragraph::new(&numbered_lines(50), &theme.body, &theme, setup.frame_width());
    let border = Stroke {
        color: theme.palette.primary,
        width: 1.0,
    };
    let table = Table::single(
        &RichText::new("boxed"),
        &theme.callout,
        &theme,
        432.0,
        theme.palette.accent,
        border,
    )
    .with_min_height(108.0);

    let pages = paginate(vec![Block::Paragraph(filler), Block::Table(table)], &setup);
    assert_eq!(pages.len(), 2);
    assert!(matches!(pages[1].ops[0], DrawOp::Rect { .. }));
    assert_eq!(pages[1].texts().collect::<Vec<_>>(), vec!["boxed"]);
}

#[test]
fn oversize_block_is_placed_on_an_empty_page() {
    let theme = Theme::ccsp();
    let setup = PageSetup::letter();
    let border = Stroke {
        color: theme.palette.primary,
        width: 1.0,
    };
    let table = Table::single(
        &RichText::new("tall"),
        &theme.callout,
        &theme,
        432.0,
        theme.palette.accent,
        border,
    )
    .with_min_height(1000.0);

    let pages = paginate(vec![Block::Table(table), Block::Spacer(21.6)], &setup);
    assert_eq!(pages.len(), 1);
    assert!(!pages[0].is_empty());
}

#[test]
fn wrapping_keeps_leading_spaces_of_hard_lines_only() {
    let theme = Theme::ccsp();
    let diagram = Paragraph::new(&RichText::new("   | box |"), &theme.caption, &theme, 400.0);
    assert_eq!(diagram.line_count(), 1);

    let words = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let narrow = Paragraph::plain(words, &theme.body, &theme, 100.0);
    assert!(narrow.line_count() > 1);

    let pages = paginate(vec![Block::Paragraph(narrow)], &PageSetup::letter());
    assert!(pages[0].texts().all(|t| !t.starts_with(' ') && !t.ends_with(' ')));
}

#[test]
fn metrics_follow_the_standard_font_widths() {
    assert_eq!(text_width(Typeface::Mono, "abcd", 10.0), 24.0);
    // 'H' 722 + 'i' 222 in Helvetica.
    assert!((text_width(Typeface::Sans, "Hi", 10.0) - 9.44).abs() < 1e-4);
    assert!(text_width(Typeface::SansBold, "Hi", 10.0) > text_width(Typeface::Sans, "Hi", 10.0));
}

#[test]
fn win_ansi_maps_typographic_characters() {
    assert_eq!(win_ansi("a\u{2022}b"), vec![b'a', 0x95, b'b']);
    assert_eq!(win_ansi("\u{2014}\u{2013}"), vec![0x97, 0x96]);
    assert_eq!(win_ansi("é"), vec![0xE9]);
    assert_eq!(win_ansi("\u{4E2D}"), vec![b'?']);
}

#[test]
fn rendered_pdf_is_deterministic() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let first = render_pdf(&deck, &theme).expect("render");
    let second = render_pdf(&deck, &theme).expect("render");

    assert!(first.artifact.bytes.starts_with(b"%PDF-"));
    assert_eq!(first.artifact.bytes, second.artifact.bytes);
    assert!(first.warnings.is_empty());
}

#[test]
fn rendered_pdf_carries_fonts_and_link_annotation() {
    let rendered = render_pdf(&ccsp_deck(), &Theme::ccsp()).expect("render");
    let text = String::from_utf8_lossy(&rendered.artifact.bytes);

    assert!(text.contains("/Helvetica-Bold"));
    assert!(text.contains("/Courier"));
    assert!(text.contains("/WinAnsiEncoding"));
    assert!(text.contains("(http://www.isc2.org)"));
    assert!(text.contains("/Title"));
}

#[test]
fn empty_deck_is_rejected() {
    let deck = Deck {
        title: "Empty".to_string(),
        slides: Vec::new(),
    };
    let err = render_pdf(&deck, &Theme::ccsp()).unwrap_err();
    assert!(matches!(err, ExportError::Pdf(_)));
}
