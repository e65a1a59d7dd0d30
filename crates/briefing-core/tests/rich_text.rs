use briefing_core::models::rich_text::{RichText, Span};

fn span(text: &str, bold: bool) -> Span {
    Span {
        text: text.to_string(),
        bold,
        link: None,
    }
}

#[test]
fn empty_markup_has_no_lines() {
    assert!(RichText::new("").lines().is_empty());
}

#[test]
fn breaks_split_lines_and_blank_lines_survive() {
    let lines = RichText::new("first<br/><br/>second<br/>").lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], vec![span("first", false)]);
    assert!(lines[1].is_empty());
    assert_eq!(lines[2], vec![span("second", false)]);
}

#[test]
fn bold_runs_are_separate_spans() {
    let lines = RichText::new("• Outcome: <b>100% visibility</b>; GDPR readiness.").lines();
    assert_eq!(
        lines,
        vec![vec![
            span("• Outcome: ", false),
            span("100% visibility", true),
            span("; GDPR readiness.", false),
        ]]
    );
}

#[test]
fn unknown_angle_brackets_are_literal() {
    let text = RichText::new("• Outcome: <b>MTTD <24h</b>; MTTR <12h");
    assert_eq!(text.plain_text(), "• Outcome: MTTD <24h; MTTR <12h");
    assert!(text.lines()[0][1].bold);
}

#[test]
fn links_carry_their_target() {
    let lines = RichText::new("Enroll at <a href='http://www.isc2.org'>www.isc2.org</a>.").lines();
    let link = &lines[0][1];
    assert_eq!(link.text, "www.isc2.org");
    assert_eq!(link.link.as_deref(), Some("http://www.isc2.org"));
    assert_eq!(lines[0][2].link, None);

    let double = RichText::new(r#"<a href="https://example.org">x</a>"#).lines();
    assert_eq!(double[0][0].link.as_deref(), Some("https://example.org"));
}

#[test]
fn entities_decode_and_bare_ampersands_stay() {
    let text = RichText::new("Risk &amp; Compliance &lt;b&gt; & Design");
    assert_eq!(text.plain_text(), "Risk & Compliance <b> & Design");
    assert_eq!(text.lines()[0].len(), 1);
}

#[test]
fn adjacent_same_style_text_is_merged() {
    let lines = RichText::new("<b>a</b><b>b</b>c").lines();
    assert_eq!(lines[0], vec![span("ab", true), span("c", false)]);
}

#[test]
fn serializes_as_its_markup() {
    let text = RichText::new("<b>CCSP</b> matters");
    let json = serde_json::to_value(&text).unwrap();
    assert_eq!(json, serde_json::json!("<b>CCSP</b> matters"));

    let back: RichText = serde_json::from_value(json).unwrap();
    assert_eq!(back.markup(), "<b>CCSP</b> matters");
}
