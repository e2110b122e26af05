//! Integration tests for the answer endpoint, driven through the real router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{zip_bytes, MultipartForm, TestHarness};
use serde_json::json;
use test_context::test_context;

fn ask(question: &str) -> Request<Body> {
    MultipartForm::new().text("question", question).into_request()
}

// =============================================================================
// Rule answers
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn vscode_question_gets_fixed_answer(ctx: &TestHarness) {
    let (status, body) = ctx.send(ask("Run code -s in your terminal")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "Visual Studio Code 1.78.2" }));
    assert_eq!(ctx.ai.call_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn sort_json_question_gets_sorted_array(ctx: &TestHarness) {
    let (status, body) = ctx
        .send(ask("Sort this JSON array of objects by age, then name"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let answer = body["answer"].as_str().expect("answer is a string");
    let people: Vec<serde_json::Value> = serde_json::from_str(answer).expect("answer is JSON");
    assert!(!people.is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn email_in_question_is_echoed(ctx: &TestHarness) {
    let (status, body) = ctx
        .send(ask(
            "Send a request to https://httpbin.org/get with email=23f2000123@ds.study.iitm.ac.in",
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let answer = body["answer"].as_str().expect("answer is a string");
    assert!(answer.contains("23f2000123@ds.study.iitm.ac.in"));
}

// =============================================================================
// Uploads
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_question_with_zip_reads_answer_column(ctx: &TestHarness) {
    let archive = zip_bytes(&[("extract.csv", "id,Answer\n1,42\n2,43\n")]);
    let request = MultipartForm::new()
        .text("question", "")
        .file("file", "q-extract.zip", &archive)
        .into_request();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "42" }));
    assert_eq!(ctx.ai.call_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unreadable_archive_gets_sentinel(ctx: &TestHarness) {
    let request = MultipartForm::new()
        .text("question", "What is in the file?")
        .file("file", "broken.zip", b"not an archive")
        .into_request();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "7f9da" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn upload_is_removed_after_answering(ctx: &TestHarness) {
    let request = MultipartForm::new()
        .text("question", "")
        .file("file", "data.csv", b"answer\nok\n")
        .into_request();

    let (status, _) = ctx.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.stored_uploads(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn file_part_may_precede_question(ctx: &TestHarness) {
    let archive = zip_bytes(&[("a.csv", "answer\nfirst\n")]);
    let request = MultipartForm::new()
        .file("file", "a.zip", &archive)
        .text("question", "")
        .into_request();

    let (_, body) = ctx.send(request).await;

    assert_eq!(body, json!({ "answer": "first" }));
}

// =============================================================================
// Remote completion
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn unmatched_question_uses_completion_verbatim(ctx: &TestHarness) {
    ctx.ai.clone().with_response("Mock answer");

    let (status, body) = ctx.send(ask("What is a p-value?")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "Mock answer" }));
    assert_eq!(
        ctx.ai.prompts(),
        vec!["Answer this question from IIT Madras Data Science course: What is a p-value?"]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn completion_failure_still_returns_ok(ctx: &TestHarness) {
    ctx.ai.clone().with_failure("proxy unreachable");

    let (status, body) = ctx.send(ask("What is a p-value?")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "Error processing with AI" }));
}

// =============================================================================
// Client and internal errors
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn non_post_methods_are_rejected(ctx: &TestHarness) {
    for method in ["GET", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/api")
            .body(Body::empty())
            .unwrap();

        let (status, body) = ctx.send(request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_question_is_bad_request(ctx: &TestHarness) {
    let request = MultipartForm::new()
        .file("file", "data.csv", b"answer\n1\n")
        .into_request();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Question is required" }));
    assert_eq!(ctx.stored_uploads(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_multipart_body_is_internal_error(ctx: &TestHarness) {
    let request = Request::builder()
        .method("POST")
        .uri("/api")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"question":"hi"}"#))
        .unwrap();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_healthy(ctx: &TestHarness) {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}
