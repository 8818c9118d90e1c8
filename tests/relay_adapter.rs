//! Mock HTTP tests for the form relay adapter.
//!
//! These tests cover:
//! - Request formatting (method, headers, form-encoded body)
//! - Endpoint resolution precedence
//! - Outcome mapping and form state after each outcome

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine::forms::{discover, ContactForm, Notice, RelayClient};

fn form_with(fields: Vec<(&str, &str)>) -> ContactForm {
    ContactForm::new(
        "contact",
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_submit_posts_form_encoded_with_json_accept_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/f/abc123"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("name=Ada&message=hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(format!("{}/f/abc123", mock_server.uri())).unwrap();
    let mut form = form_with(vec![("name", "Ada"), ("message", "hello")]);

    let notice = client.submit(&mut form).await;
    assert_eq!(notice, Notice::Delivered);
}

#[tokio::test]
async fn test_successful_submission_resets_fields_and_restores_control() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(mock_server.uri()).unwrap();
    let mut form = form_with(vec![("name", "Ada"), ("message", "hello")]);

    let notice = client.submit(&mut form).await;

    assert_eq!(notice, Notice::Delivered);
    assert!(form.fields.iter().all(|(_, value)| value.is_empty()));
    assert!(form.submit.enabled);
    assert_eq!(form.submit.label, "Send");
}

#[tokio::test]
async fn test_rejected_submission_keeps_fields_for_correction() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [{"message": "email is required"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(mock_server.uri()).unwrap();
    let mut form = form_with(vec![("message", "hello")]);

    let notice = client.submit(&mut form).await;

    assert_eq!(notice, Notice::Rejected { status: 422 });
    assert_eq!(form.fields[0].1, "hello");
    assert!(form.submit.enabled);
    assert_eq!(form.submit.label, "Send");
}

#[tokio::test]
async fn test_rejection_without_json_body_still_maps_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("relay exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(mock_server.uri()).unwrap();
    let mut form = form_with(vec![("message", "hello")]);

    assert_eq!(
        client.submit(&mut form).await,
        Notice::Rejected { status: 500 }
    );
}

#[tokio::test]
async fn test_connection_failure_keeps_form_and_restores_control() {
    // Nothing listens here.
    let client = RelayClient::with_endpoint("http://127.0.0.1:1/f/abc".to_string()).unwrap();
    let mut form = form_with(vec![("message", "hello")]);

    let notice = client.submit(&mut form).await;

    assert_eq!(notice, Notice::ConnectionFailed);
    assert_eq!(form.fields[0].1, "hello");
    assert!(form.submit.enabled);
    assert_eq!(form.submit.label, "Send");
}

#[tokio::test]
async fn test_endpoint_override_takes_precedence_over_action_and_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/override"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(format!("{}/default", mock_server.uri())).unwrap();
    let mut form = form_with(vec![("message", "hello")])
        .with_action(&format!("{}/action", mock_server.uri()))
        .with_endpoint_override(&format!("{}/override", mock_server.uri()));

    assert_eq!(client.submit(&mut form).await, Notice::Delivered);
}

#[tokio::test]
async fn test_form_action_used_when_no_override_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(format!("{}/default", mock_server.uri())).unwrap();
    let mut form =
        form_with(vec![("message", "hello")]).with_action(&format!("{}/action", mock_server.uri()));

    assert_eq!(client.submit(&mut form).await, Notice::Delivered);
}

#[tokio::test]
async fn test_default_endpoint_used_as_last_resort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::with_endpoint(format!("{}/default", mock_server.uri())).unwrap();
    let mut form = form_with(vec![("message", "hello")]);

    assert_eq!(client.submit(&mut form).await, Notice::Delivered);
}

#[tokio::test]
async fn test_discovered_forms_submit_through_relay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut forms = vec![
        form_with(vec![("name", "Ada")]),
        ContactForm::new("ignored", Vec::new()).with_relay_marker(false),
        ContactForm::new("by-label", vec![("message".to_string(), "hola".to_string())])
            .with_relay_marker(false)
            .with_aria_label("Formulario de contacto"),
    ];

    let attached = discover(&mut forms);
    assert_eq!(attached, vec![0, 2]);

    let client = RelayClient::with_endpoint(mock_server.uri()).unwrap();
    for index in attached {
        assert_eq!(client.submit(&mut forms[index]).await, Notice::Delivered);
    }
}
