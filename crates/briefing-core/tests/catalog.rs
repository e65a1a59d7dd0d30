use briefing_core::catalog::{ccsp_deck, case_study_chart, DECK_TITLE};
use briefing_core::models::slide::SlideLayout;
use briefing_core::models::visual::VisualAttachment;
use briefing_core::theme::PaletteColor;

#[test]
fn deck_has_ten_slides_in_order() {
    let deck = ccsp_deck();
    let titles: Vec<_> = deck.slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            DECK_TITLE,
            "Cloud vs. On-Premises Risks",
            "Your Biggest Cloud Security Concern",
            "Key Security Challenges in Cloud",
            "CCSP Domains for Transformation",
            "Best Practices for Secure Cloud Adoption",
            "Case Study: Multi-Cloud Financial Transformation",
            "Test Your CCSP Knowledge",
            "Actionable Steps for Cloud Security",
            "Strategize and Scale with CCSP",
        ]
    );
}

#[test]
fn only_the_first_slide_uses_the_title_layout() {
    let deck = ccsp_deck();
    assert_eq!(deck.slides[0].layout, SlideLayout::Title);
    assert!(deck.slides[0].body.is_empty());
    assert!(deck.slides[0].accent.is_some());
    assert!(
        deck.slides[1..]
            .iter()
            .all(|s| s.layout == SlideLayout::TitleAndContent && !s.body.is_empty())
    );
}

#[test]
fn title_slide_stat_grid_has_three_entries() {
    let deck = ccsp_deck();
    let grid = deck.slides[0].visuals.iter().find_map(|v| match v {
        VisualAttachment::StatGrid { entries } => Some(entries),
        _ => None,
    });
    let labels: Vec<_> = grid.unwrap().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["High", "Critical", "Strategic"]);
}

#[test]
fn case_study_chart_shape() {
    let chart = case_study_chart();
    assert_eq!(
        chart.categories,
        vec!["Planning", "Implementation", "Optimization", "Overall"]
    );
    assert!(chart.series.len() <= 4);
    assert_eq!(chart.series[0].name, "Compliance");
    assert_eq!(chart.series[0].values, vec![100.0, 90.0, 95.0, 100.0]);
    assert_eq!(chart.value_max, 100.0);
    assert_eq!(chart.peak(), 100.0);
    assert_eq!(chart.axis_max(), 100.0);
}

#[test]
fn axis_rises_to_a_value_above_the_declared_max() {
    let mut chart = case_study_chart();
    chart.series[1].values[3] = 150.0;
    assert_eq!(chart.peak(), 150.0);
    assert_eq!(chart.axis_max(), 150.0);
}

#[test]
fn overall_category_holds_each_active_series_maximum() {
    let chart = case_study_chart();
    for series in &chart.series {
        assert_eq!(series.values.len(), chart.categories.len());
        let (overall, stages) = series.values.split_last().unwrap();
        if stages.iter().any(|v| *v > 0.0) {
            assert!(stages.iter().all(|v| v <= overall), "{}", series.name);
        }
    }
}

#[test]
fn callout_fills_match_their_slides() {
    let deck = ccsp_deck();
    let fills = |idx: usize| -> Vec<(PaletteColor, bool)> {
        deck.slides[idx]
            .visuals
            .iter()
            .filter_map(|v| match v {
                VisualAttachment::CalloutBox { fill, monospace, .. } => Some((*fill, *monospace)),
                _ => None,
            })
            .collect()
    };
    assert_eq!(fills(1), vec![(PaletteColor::NeutralLight, true)]);
    assert_eq!(fills(5), vec![(PaletteColor::Success, false)]);
    assert_eq!(fills(6), vec![(PaletteColor::NeutralLight, true)]);
    assert_eq!(fills(9), vec![(PaletteColor::SecondaryAccent, false)]);
}

#[test]
fn closing_slide_links_to_isc2() {
    let deck = ccsp_deck();
    let link = deck.slides[9]
        .body
        .lines()
        .into_iter()
        .flatten()
        .find_map(|span| span.link);
    assert_eq!(link.as_deref(), Some("http://www.isc2.org"));
}
