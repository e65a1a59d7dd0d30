#![cfg(feature = "pptx")]

use std::io::{Cursor, Read};

use zip::ZipArchive;

use briefing_core::catalog::{case_study_chart, ccsp_deck};
use briefing_core::models::rich_text::RichText;
use briefing_core::models::slide::{Deck, SlideLayout, SlideRecord};
use briefing_core::models::visual::{Series, VisualAttachment};
use briefing_core::theme::Theme;
use briefing_export::error::ExportError;
use briefing_export::format::RenderWarning;
use briefing_export::pptx::render_pptx;
use briefing_export::pptx::shape::{Autofit, Bounds, Run, RunStyle, TextBody, TextParagraph};
use briefing_export::pptx::xml::inches;

fn archive(bytes: &[u8]) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip")
}

fn part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut file = archive.by_name(name).unwrap_or_else(|_| panic!("missing {name}"));
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("utf-8 part");
    xml
}

fn rendered_deck() -> ZipArchive<Cursor<Vec<u8>>> {
    let rendered = render_pptx(&ccsp_deck(), &Theme::ccsp()).expect("render");
    assert!(rendered.warnings.is_empty());
    archive(&rendered.artifact.bytes)
}

#[test]
fn package_has_ten_slides_and_content_types_first() {
    let mut zip = rendered_deck();
    assert_eq!(zip.by_index(0).expect("entry").name(), "[Content_Types].xml");

    let slides = zip
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 10);

    let presentation = part(&mut zip, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 10);
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));

    let types = part(&mut zip, "[Content_Types].xml");
    assert!(types.contains("/ppt/slides/slide10.xml"));
    assert!(types.contains("/ppt/charts/chart1.xml"));
}

#[test]
fn title_slide_has_three_stat_boxes_and_no_body() {
    let mut zip = rendered_deck();
    let xml = part(&mut zip, "ppt/slides/slide1.xml");

    assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
    assert!(!xml.contains(r#"type="body""#));
    assert_eq!(xml.matches(r#"name="Stat "#).count(), 3);
    for x in [685800, 3429000, 6172200] {
        assert!(xml.contains(&format!(r#"<a:off x="{x}" y="4572000"/>"#)), "stat at {x}");
    }
    assert!(xml.contains(r#"<a:srgbClr val="764BA2"/>"#));
    assert!(xml.contains(r#"<a:srgbClr val="F5576C"/>"#));

    let rels = part(&mut zip, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels.contains("slideLayout1.xml"));
}

#[test]
fn content_slides_pair_title_and_body_placeholders() {
    let mut zip = rendered_deck();
    for n in 2..=10 {
        let xml = part(&mut zip, &format!("ppt/slides/slide{n}.xml"));
        assert!(xml.contains(r#"<p:ph type="title"/>"#), "slide {n}");
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#), "slide {n}");
        let rels = part(&mut zip, &format!("ppt/slides/_rels/slide{n}.xml.rels"));
        assert!(rels.contains("slideLayout2.xml"), "slide {n}");
    }
}

#[test]
fn case_study_chart_is_a_native_chart_part() {
    let mut zip = rendered_deck();
    let slide = part(&mut zip, "ppt/slides/slide7.xml");
    assert!(slide.contains("<p:graphicFrame>"));

    let rels = part(&mut zip, "ppt/slides/_rels/slide7.xml.rels");
    assert!(rels.contains("../charts/chart1.xml"));

    let chart = part(&mut zip, "ppt/charts/chart1.xml");
    assert!(chart.contains(r#"<c:barDir val="col"/>"#));
    assert_eq!(chart.matches("<c:ser>").count(), 4);
    assert!(chart.contains(r#"<c:ptCount val="4"/>"#));
    assert!(chart.contains("<c:v>Overall</c:v>"));
    assert!(chart.contains(r#"<c:legendPos val="t"/>"#));
    assert!(chart.contains(r#"<c:max val="100"/>"#));
    assert!(chart.contains("Improvement (%)"));
    assert!(chart.contains(r#"<a:srgbClr val="667EEA"/>"#));
}

#[test]
fn hyperlink_is_an_external_relationship() {
    let mut zip = rendered_deck();
    let rels = part(&mut zip, "ppt/slides/_rels/slide10.xml.rels");
    assert!(rels.contains(r#"Target="http://www.isc2.org" TargetMode="External""#));

    let slide = part(&mut zip, "ppt/slides/slide10.xml");
    assert!(slide.contains("<a:hlinkClick r:id=\"rId2\"/>"));
}

#[test]
fn theme_carries_the_palette() {
    let mut zip = rendered_deck();
    let theme = part(&mut zip, "ppt/theme/theme1.xml");
    assert!(theme.contains(r#"<a:accent1><a:srgbClr val="667EEA"/></a:accent1>"#));
    assert!(theme.contains(r#"<a:dk1><a:srgbClr val="2C3E50"/></a:dk1>"#));
}

#[test]
fn rendered_pptx_is_deterministic() {
    let deck = ccsp_deck();
    let theme = Theme::ccsp();
    let first = render_pptx(&deck, &theme).expect("render");
    let second = render_pptx(&deck, &theme).expect("render");
    assert_eq!(first.artifact.bytes, second.artifact.bytes);
}

#[test]
fn series_without_a_palette_fill_degrades_with_a_warning() {
    let mut chart = case_study_chart();
    chart.series.push(Series {
        name: "Fifth".to_string(),
        values: vec![10.0, 20.0, 30.0, 40.0],
    });
    let deck = Deck {
        title: "Degraded".to_string(),
        slides: vec![SlideRecord {
            title: "Chart".to_string(),
            layout: SlideLayout::TitleAndContent,
            accent: None,
            body: RichText::new("Five series"),
            visuals: vec![VisualAttachment::BarChart(chart)],
        }],
    };

    let rendered = render_pptx(&deck, &Theme::ccsp()).expect("render still succeeds");
    assert_eq!(
        rendered.warnings,
        vec![RenderWarning::SeriesFillUnsupported {
            slide: 1,
            series: "Fifth".to_string(),
            reason: "palette has no fill for series 5".to_string(),
        }]
    );

    let mut zip = archive(&rendered.artifact.bytes);
    let xml = part(&mut zip, "ppt/charts/chart1.xml");
    assert_eq!(xml.matches("<c:ser>").count(), 5);
    assert_eq!(xml.matches("<c:spPr>").count(), 4);
}

#[test]
fn value_axis_covers_values_above_the_declared_max() {
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

    let rendered = render_pptx(&deck, &Theme::ccsp()).expect("render");
    let mut zip = archive(&rendered.artifact.bytes);
    let xml = part(&mut zip, "ppt/charts/chart1.xml");
    assert!(xml.contains(r#"<c:max val="150"/>"#));
    assert!(xml.contains(r#"<c:majorUnit val="30"/>"#));
}

fn body_shape(xml: &str) -> &str {
    xml.split("<p:sp>")
        .find(|shape| shape.contains(r#"type="body""#))
        .expect("body placeholder")
}

fn text_deck(body: RichText) -> Deck {
    Deck {
        title: "Fit".to_string(),
        slides: vec![SlideRecord {
            title: "Body".to_string(),
            layout: SlideLayout::TitleAndContent,
            accent: None,
            body,
            visuals: Vec::new(),
        }],
    }
}

fn numbered(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Control objective {i}"))
        .collect::<Vec<_>>()
        .join("<br/>")
}

#[test]
fn overflowing_body_shrinks_to_fit() {
    let deck = text_deck(RichText::new(numbered(60)));
    let rendered = render_pptx(&deck, &Theme::ccsp()).expect("render");
    let mut zip = archive(&rendered.artifact.bytes);
    let xml = part(&mut zip, "ppt/slides/slide1.xml");
    let body = body_shape(&xml);
    assert!(body.contains(r#"<a:normAutofit fontScale=""#), "{body}");
    assert!(body.contains(r#"lnSpcReduction="10000""#));
    assert!(body.contains("Control objective 60"));
}

#[test]
fn short_body_keeps_its_size() {
    let deck = text_deck(RichText::new("One line<br/>Two lines"));
    let rendered = render_pptx(&deck, &Theme::ccsp()).expect("render");
    let mut zip = archive(&rendered.artifact.bytes);
    let xml = part(&mut zip, "ppt/slides/slide1.xml");
    assert!(body_shape(&xml).contains("<a:bodyPr><a:normAutofit/></a:bodyPr>"));
}

#[test]
fn font_scale_shrinks_with_more_lines() {
    let frame = Bounds {
        x: 0,
        y: 0,
        cx: inches(9.0),
        cy: inches(5.5),
    };
    let body = |n: usize| TextBody {
        paragraphs: (1..=n)
            .map(|i| TextParagraph {
                runs: vec![Run {
                    text: format!("line {i}"),
                    bold: false,
                    link: None,
                }],
            })
            .collect(),
        style: RunStyle {
            size: Some(1200),
            ..RunStyle::default()
        },
        ..TextBody::default()
    };

    assert_eq!(body(10).autofit(frame), Autofit::none());
    let sixty = body(60).autofit(frame);
    let ninety = body(90).autofit(frame);
    assert!(sixty.is_scaled());
    assert!(ninety.font_scale < sixty.font_scale);
    assert_eq!(sixty.line_reduction, 10_000);
}

#[test]
fn empty_deck_is_rejected() {
    let deck = Deck {
        title: "Empty".to_string(),
        slides: Vec::new(),
    };
    let err = render_pptx(&deck, &Theme::ccsp()).unwrap_err();
    assert!(matches!(err, ExportError::Pptx(_)));
}
