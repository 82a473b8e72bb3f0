use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DeliveryStatus, MessageIdSet, SmsId, StatusResponse};

/// JSON body of `sms/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusJsonRequest<'a> {
    id_sms: Vec<&'a str>,
}

pub fn encode_status_body(ids: &MessageIdSet) -> StatusJsonRequest<'_> {
    StatusJsonRequest {
        id_sms: ids.ids().iter().map(SmsId::as_str).collect(),
    }
}

/// Build a typed view over a normalized (`info`-unwrapped) `sms/status` payload.
pub fn decode_status_response(raw: Value) -> StatusResponse {
    let parsed = BTreeMap::<String, Value>::deserialize(&raw).unwrap_or_default();
    let statuses = parsed
        .into_iter()
        .filter_map(|(key, value)| {
            let sms_id = SmsId::new(key).ok()?;
            match value {
                Value::String(status) => Some((sms_id, DeliveryStatus::new(status))),
                _ => None,
            }
        })
        .collect();

    StatusResponse { statuses, raw }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::KnownDeliveryStatus;

    use super::*;

    #[test]
    fn encode_status_body_lists_ids() {
        let ids = MessageIdSet::new(vec![SmsId::new("1001").unwrap(), SmsId::new("1002").unwrap()])
            .unwrap();
        let body = encode_status_body(&ids);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"id_sms":["1001","1002"]}"#
        );
    }

    #[test]
    fn encode_status_body_keeps_empty_list() {
        let ids = MessageIdSet::default();
        let body = encode_status_body(&ids);
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"id_sms":[]}"#);
    }

    #[test]
    fn decode_maps_known_and_unknown_statuses() {
        let raw = json!({"1001": "DELIVRD", "1002": "QUEUED", "1003": 7});
        let response = decode_status_response(raw.clone());

        let delivered = response.statuses.get(&SmsId::new("1001").unwrap()).unwrap();
        assert_eq!(delivered.known(), Some(KnownDeliveryStatus::Delivered));

        let unknown = response.statuses.get(&SmsId::new("1002").unwrap()).unwrap();
        assert_eq!(unknown.known(), None);
        assert_eq!(unknown.as_str(), "QUEUED");

        assert!(!response.statuses.contains_key(&SmsId::new("1003").unwrap()));
        assert_eq!(response.raw, raw);
    }

    #[test]
    fn decode_tolerates_non_object_payload() {
        let response = decode_status_response(json!("no data"));
        assert!(response.statuses.is_empty());
    }
}
