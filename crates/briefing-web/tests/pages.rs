use briefing_export::format::Format;
use briefing_export::preflight::remediation;
use briefing_web::routes::page;

#[test]
fn missing_backend_page_lists_remediation_as_code() {
    let html = page::missing_backend(Format::Pptx, &remediation(Format::Pptx)).unwrap();
    assert!(html.contains("<title>PPTX export unavailable</title>"));
    assert!(html.contains("PPTX export is not available."));
    assert!(html.contains("<code>cargo build --release --features pptx</code>"));
    assert_eq!(html.matches("<li>").count(), 4);
    assert!(html.contains(r#"<a href="/">Back</a>"#));
}

#[test]
fn remediation_markup_is_escaped() {
    let lines = vec!["Run `<rebuild>` & retry".to_string()];
    let html = page::missing_backend(Format::Pdf, &lines).unwrap();
    assert!(html.contains("Run <code>&lt;rebuild&gt;</code> &amp; retry"));
}

#[test]
fn index_lists_a_notice_per_missing_backend() {
    let html = page::index("Deck", &[Format::Pdf, Format::Pptx]).unwrap();
    assert_eq!(html.matches(r#"class="notice""#).count(), 2);
    assert!(html.contains("PDF export is not available."));

    let html = page::index("Deck", &[]).unwrap();
    assert!(!html.contains(r#"class="notice""#));
    assert!(html.contains("presentation on Deck."));
}
