use crate::common::create_test_client;
use mockito::{Matcher, Server};
use pam_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_send_event_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/trackers/events")
        .match_header("x-app-id", "test-app")
        .match_header("x-secret", "test-secret")
        .match_header("cookie", "contact_id=contact_123")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "event": "purchase",
            "form_fields": {"_campaign": "campaign_123", "sku": "A-1"}
        })))
        .with_status(200)
        .with_body(r#"{"contact_id":"contact_123"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let tracker = Tracker::new("purchase").with_form_field("sku", "A-1");
    let body = client
        .send_event("contact_123", "campaign_123", tracker)
        .await
        .unwrap();

    assert_eq!(body, r#"{"contact_id":"contact_123"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_campaign_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/campaigns/unknown")
        .with_status(404)
        .with_body(r#"{"code":"NOT_FOUND"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let error = client.get_campaign_detail("unknown").await.unwrap_err();

    assert_eq!(error.to_string(), "404 Not Found");
    assert_eq!(error.body(), Some(r#"{"code":"NOT_FOUND"}"#));
}

#[tokio::test]
async fn test_update_message_sms() {
    let raw = r#"{"id":"msg-1","campaign_id":"cmp-1","message":"Hello","media":{"id":"m-1","type":"sms"}}"#;
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/campaigns/cmp-1/messages/sms")
        .match_body(Matcher::Json(json!({"message": "Hello", "media_id": "m-1"})))
        .with_status(200)
        .with_body(raw)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let body = UpdateMessageSms::new("Hello").with_media_id("m-1");
    let (response, text) = client.update_message_sms("cmp-1", &body).await.unwrap();

    assert_eq!(response.message, "Hello");
    assert_eq!(response.media.unwrap().id, "m-1");
    assert_eq!(text, raw);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_long_response_returned_intact() {
    let long_body = "c".repeat(2000);
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/contacts")
        .match_query(Matcher::UrlEncoded("q".into(), "jane".into()))
        .with_status(200)
        .with_body(&long_body)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let body = client
        .get_contacts(&ContactQuery::new().with_search("jane", ""))
        .await
        .unwrap();

    assert_eq!(body, long_body);
}

#[tokio::test]
async fn test_contact_upload() {
    let dir = std::env::temp_dir().join(format!("pam-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("import.csv");
    std::fs::write(&file, "email,name\njane@example.com,Jane\n").unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/contacts/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"filename="import.csv""#.to_string()),
            Matcher::Regex(r#"name="attrs""#.to_string()),
            Matcher::Regex(r#"name="tags""#.to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"imported":1}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let body = client
        .create_contact(&file, "email,name", "imported")
        .await
        .unwrap();

    assert_eq!(body, r#"{"imported":1}"#);
    mock.assert_async().await;
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let client = create_test_client("http://127.0.0.1:1");
    let error = client.product_trends(10).await.unwrap_err();

    assert!(error.is_logged());
    assert!(error.status().is_none());
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_blocking_caller() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/triggers/count")
        .with_status(200)
        .with_body("12")
        .create();

    let client = create_test_client(&server.url());
    let body = tokio_test::block_on(client.get_segments_count()).unwrap();

    assert_eq!(body, "12");
    mock.assert();
}
