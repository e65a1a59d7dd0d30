use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use briefing_core::catalog::{DECK_TITLE, ccsp_deck};
use briefing_core::theme::Theme;
use briefing_web::routes::page::APP_TITLE;
use briefing_web::state::AppState;

fn state_in(dir: &Path) -> AppState {
    AppState::new(ccsp_deck(), Theme::ccsp(), dir)
}

async fn send(state: AppState, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    briefing_web::app(state).oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn header_str<'a>(response: &'a Response, name: &str) -> &'a str {
    response.headers()[name].to_str().unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn index_offers_both_triggers() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "GET", "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, "content-type").starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains(&format!("<h1>{APP_TITLE}</h1>")));
    assert!(html.contains(DECK_TITLE));
    assert!(html.contains("Generate and Download PDF"));
    assert!(html.contains("Generate and Download PPTX"));
    assert!(html.contains(r#"action="/generate/pdf""#));
    assert!(html.contains(r#"action="/generate/pptx""#));
}

#[tokio::test]
async fn index_escapes_the_deck_title() {
    let scratch = tempfile::tempdir().unwrap();
    let mut deck = ccsp_deck();
    deck.title = "Risk & <Reward>".to_string();
    let state = AppState::new(deck, Theme::ccsp(), scratch.path());

    let html = String::from_utf8(body_bytes(send(state, "GET", "/").await).await).unwrap();
    assert!(html.contains("Risk &amp; &lt;Reward&gt;"));
    assert!(!html.contains("<Reward>"));
}

#[tokio::test]
async fn deck_endpoint_serves_the_content_model() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "GET", "/api/deck").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["title"], DECK_TITLE);
    assert_eq!(json["slides"].as_array().unwrap().len(), 10);
    assert_eq!(json["slides"][0]["layout"], "title");
}

#[cfg(feature = "pdf")]
#[tokio::test]
async fn pdf_download_is_an_attachment() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "POST", "/generate/pdf").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "content-type"), "application/pdf");
    assert_eq!(
        header_str(&response, "content-disposition"),
        r#"attachment; filename="cloud_security_ccsp.pdf""#
    );
    assert_eq!(header_str(&response, "x-render-warnings"), "0");

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[cfg(feature = "pptx")]
#[tokio::test]
async fn pptx_download_is_an_attachment() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "POST", "/generate/pptx").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, header::CONTENT_TYPE.as_str()),
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    );
    assert_eq!(
        header_str(&response, header::CONTENT_DISPOSITION.as_str()),
        r#"attachment; filename="cloud_security_ccsp.pptx""#
    );
    assert_eq!(header_str(&response, "x-render-warnings"), "0");

    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"PK"));
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unknown_format_is_not_found() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "POST", "/generate/docx").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"], "unknown export format: docx");
}

#[tokio::test]
async fn generate_requires_post() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "GET", "/generate/pdf").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[cfg(feature = "pdf")]
#[tokio::test]
async fn unwritable_scratch_dir_is_an_internal_error() {
    let scratch = tempfile::tempdir().unwrap();
    let missing = scratch.path().join("does-not-exist");
    let response = send(state_in(&missing), "POST", "/generate/pdf").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["error"], "internal server error");
    assert!(!missing.exists());
}

#[cfg(not(feature = "pptx"))]
#[tokio::test]
async fn missing_backend_answers_with_remediation() {
    let scratch = tempfile::tempdir().unwrap();
    let response = send(state_in(scratch.path()), "POST", "/generate/pptx").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(header_str(&response, "content-type").starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("PPTX export is not available"));
    assert!(html.contains("<code>cargo build --release --features pptx</code>"));
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}
