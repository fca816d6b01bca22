use quote_reminder::core::config::ReminderConfig;
use quote_reminder::core::models::ReminderRequest;
use quote_reminder::errors::ReminderError;
use quote_reminder::reminder::render_request;

const REQUEST: &str = r#"{
    "requesting_user": { "id": 11, "realm": { "id": 1, "url": "https://chat.example.com" } },
    "message": {
        "id": 42,
        "sender": { "id": 10, "full_name": "Iago" },
        "recipient": { "type": "channel", "channel_id": 5, "topic": "lunch" },
        "content": "Pizza at noon?",
        "date_sent": "2024-05-01T12:00:00Z"
    },
    "channels": [ { "id": 5, "name": "Denmark", "realm_id": 1 } ]
}"#;

#[test]
fn test_render_request_from_json() {
    let request: ReminderRequest = serde_json::from_str(REQUEST).unwrap();
    let body = render_request(&request, &ReminderConfig::default()).unwrap();
    assert!(body.starts_with("You requested a reminder for #**Denmark>lunch@42**."));
    assert!(body.ends_with("```quote\nPizza at noon?\n```"));
}

#[test]
fn test_render_request_honours_configured_ceiling() {
    let request: ReminderRequest = serde_json::from_str(REQUEST).unwrap();
    let config = ReminderConfig {
        max_message_length: 20,
        ..ReminderConfig::default()
    };
    let result = render_request(&request, &config);
    assert!(matches!(result, Err(ReminderError::Configuration(_))));
}

#[test]
fn test_render_request_without_channels_is_not_found() {
    let mut value: serde_json::Value = serde_json::from_str(REQUEST).unwrap();
    value["channels"] = serde_json::json!([]);
    let request: ReminderRequest = serde_json::from_value(value).unwrap();
    let result = render_request(&request, &ReminderConfig::default());
    assert!(matches!(result, Err(ReminderError::NotFound(_))));
}

#[test]
fn test_malformed_request_is_rejected() {
    let err = serde_json::from_str::<ReminderRequest>(r#"{"message": {}}"#).unwrap_err();
    let err = ReminderError::from(err);
    assert!(matches!(err, ReminderError::InvalidRequest(_)));
}
