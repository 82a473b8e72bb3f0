use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::value::{DeliveryStatus, SmsId};

/// Result of `sms/send`. The `info` envelope is kept in `raw`.
#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    /// Assigned message id → recipient phone, as reported in `info`.
    pub sms: BTreeMap<SmsId, String>,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub statuses: BTreeMap<SmsId, DeliveryStatus>,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResponse {
    pub money: Option<String>,
    pub currency: Option<String>,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OriginatorResponse {
    /// Alpha names registered for the account.
    pub originators: Vec<String>,
    pub raw: Value,
}
