use serde::Deserialize;
use serde_json::Value;

use super::money::TransportMoney;
use crate::domain::{BalanceResponse, OriginatorResponse};

#[derive(Debug, Default, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    money: Option<TransportMoney>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OriginatorsJsonResponse {
    List(Vec<String>),
    Map(serde_json::Map<String, Value>),
}

/// Balance and originator calls carry no parameters.
pub fn encode_empty_body() -> serde_json::Map<String, Value> {
    serde_json::Map::new()
}

/// Build a typed view over a normalized `sms/balance` payload.
pub fn decode_balance_response(raw: Value) -> BalanceResponse {
    let parsed = BalanceJsonResponse::deserialize(&raw).unwrap_or_default();
    BalanceResponse {
        money: parsed.money.map(TransportMoney::into_string),
        currency: parsed.currency,
        raw,
    }
}

/// Build a typed view over a normalized `sms/originator` payload.
///
/// SMSClub returns a list of names; an object is read through its string values.
pub fn decode_originator_response(raw: Value) -> OriginatorResponse {
    let originators = match OriginatorsJsonResponse::deserialize(&raw) {
        Ok(OriginatorsJsonResponse::List(names)) => names,
        Ok(OriginatorsJsonResponse::Map(map)) => map
            .into_iter()
            .filter_map(|(_, value)| match value {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    OriginatorResponse { originators, raw }
}
