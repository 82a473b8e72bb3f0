use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    MessageText, OutboundMessage, RawPhoneNumber, SEND_SMS_MAX_RECIPIENTS, SendSmsResponse,
    SenderId, SmsId, ValidationError,
};

/// JSON body of `sms/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendJsonRequest<'a> {
    src_addr: &'a str,
    phone: Vec<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    integration_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    info: BTreeMap<String, Value>,
}

/// Validate `message` and shape it into the `sms/send` body.
///
/// The recipient limit is checked before presence of the other fields. The message's own
/// sender wins over `default_sender`.
pub fn encode_send_body<'a>(
    message: &'a OutboundMessage,
    default_sender: Option<&'a SenderId>,
) -> Result<SendJsonRequest<'a>, ValidationError> {
    if message.to().len() > SEND_SMS_MAX_RECIPIENTS {
        return Err(ValidationError::TooMany {
            field: RawPhoneNumber::FIELD,
            max: SEND_SMS_MAX_RECIPIENTS,
            actual: message.to().len(),
        });
    }

    let sender = message
        .sender()
        .or(default_sender)
        .ok_or(ValidationError::MissingField {
            field: SenderId::FIELD,
        })?;
    if message.to().is_empty() {
        return Err(ValidationError::MissingField {
            field: RawPhoneNumber::FIELD,
        });
    }
    let text = message.message().ok_or(ValidationError::MissingField {
        field: MessageText::FIELD,
    })?;

    Ok(SendJsonRequest {
        src_addr: sender.as_str(),
        phone: message.to().iter().map(RawPhoneNumber::raw).collect(),
        message: text.as_str(),
        integration_id: message.integration_id().map(|id| id.value()),
    })
}

/// Build a typed view over a normalized `sms/send` payload. Never fails.
pub fn decode_send_response(raw: Value) -> SendSmsResponse {
    let parsed = SendJsonResponse::deserialize(&raw).unwrap_or_default();
    let sms = parsed
        .info
        .into_iter()
        .filter_map(|(key, value)| {
            let sms_id = SmsId::new(key).ok()?;
            let phone = match value {
                Value::String(phone) => phone,
                Value::Null => return None,
                other => other.to_string(),
            };
            Some((sms_id, phone))
        })
        .collect();

    SendSmsResponse { sms, raw }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn message() -> OutboundMessage {
        OutboundMessage::builder()
            .recipient(RawPhoneNumber::new("380501234567").unwrap())
            .message(MessageText::new("Hi").unwrap())
            .build()
    }

    #[test]
    fn encode_uses_default_sender_and_omits_integration_id() {
        let sender = SenderId::new("MYBRAND").unwrap();
        let msg = message();
        let body = encode_send_body(&msg, Some(&sender)).unwrap();
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"src_addr":"MYBRAND","phone":["380501234567"],"message":"Hi"}"#
        );
    }

    #[test]
    fn encode_prefers_message_sender_and_sends_zero_integration_id() {
        let default_sender = SenderId::new("DEFAULT").unwrap();
        let msg = OutboundMessage::builder()
            .sender(SenderId::new("Shop").unwrap())
            .to(vec![
                RawPhoneNumber::new("380501234567").unwrap(),
                RawPhoneNumber::new("380671234567").unwrap(),
            ])
            .message(MessageText::new("Sale").unwrap())
            .integration_id(0)
            .build();

        let body = encode_send_body(&msg, Some(&default_sender)).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "src_addr": "Shop",
                "phone": ["380501234567", "380671234567"],
                "message": "Sale",
                "integration_id": 0
            })
        );
    }

    #[test]
    fn encode_reports_missing_fields() {
        let err = encode_send_body(&message(), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "from" });

        let sender = SenderId::new("MYBRAND").unwrap();
        let no_recipients = OutboundMessage::builder()
            .message(MessageText::new("Hi").unwrap())
            .build();
        let err = encode_send_body(&no_recipients, Some(&sender)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "to" });

        let no_text = OutboundMessage::builder()
            .recipient(RawPhoneNumber::new("380501234567").unwrap())
            .build();
        let err = encode_send_body(&no_text, Some(&sender)).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "message" });
    }

    #[test]
    fn encode_enforces_recipient_limit() {
        let sender = SenderId::new("MYBRAND").unwrap();
        let phone = RawPhoneNumber::new("380501234567").unwrap();
        let msg = OutboundMessage::builder()
            .to(vec![phone; SEND_SMS_MAX_RECIPIENTS + 1])
            .message(MessageText::new("Hi").unwrap())
            .build();

        let err = encode_send_body(&msg, Some(&sender)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooMany {
                max: SEND_SMS_MAX_RECIPIENTS,
                actual: 101,
                ..
            }
        ));
    }

    #[test]
    fn encode_checks_recipient_limit_before_missing_fields() {
        let phone = RawPhoneNumber::new("380501234567").unwrap();
        let msg = OutboundMessage::builder()
            .to(vec![phone; SEND_SMS_MAX_RECIPIENTS + 1])
            .build();

        let err = encode_send_body(&msg, None).unwrap_err();
        assert!(matches!(err, ValidationError::TooMany { actual: 101, .. }));
    }

    #[test]
    fn decode_maps_info_ids_to_phones() {
        let raw = json!({
            "info": {"1001": "380501234567", "1002": 380671234567_u64},
            "add_info": {"380000000000": "Invalid number"}
        });

        let response = decode_send_response(raw.clone());
        assert_eq!(response.sms.len(), 2);
        assert_eq!(
            response.sms.get(&SmsId::new("1001").unwrap()).map(String::as_str),
            Some("380501234567")
        );
        assert_eq!(
            response.sms.get(&SmsId::new("1002").unwrap()).map(String::as_str),
            Some("380671234567")
        );
        assert_eq!(response.raw, raw);
    }

    #[test]
    fn decode_tolerates_unexpected_shapes() {
        let response = decode_send_response(json!(["unexpected"]));
        assert!(response.sms.is_empty());
        assert_eq!(response.raw, json!(["unexpected"]));
    }
}
