//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    GET_STATUS_MAX_SMS_IDS, MessageIdSet, OutboundMessage, OutboundMessageBuilder,
    SEND_SMS_MAX_RECIPIENTS,
};
pub use response::{BalanceResponse, OriginatorResponse, SendSmsResponse, StatusResponse};
pub use validation::ValidationError;
pub use value::{
    DeliveryStatus, IntegrationId, KnownDeliveryStatus, MessageText, PhoneNumber, RawPhoneNumber,
    SenderId, SmsId, Token,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_rejects_empty() {
        assert!(matches!(
            Token::new("   "),
            Err(ValidationError::Empty {
                field: Token::FIELD
            })
        ));
    }

    #[test]
    fn raw_phone_number_from_phone_number_drops_plus() {
        let pn =
            PhoneNumber::parse(Some(phonenumber::country::Id::UA), "+380501234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "380501234567");
    }

    #[test]
    fn outbound_message_builder_collects_fields() {
        let message = OutboundMessage::builder()
            .sender(SenderId::new("MYBRAND").unwrap())
            .recipient(RawPhoneNumber::new("380501234567").unwrap())
            .recipient(RawPhoneNumber::new("380671234567").unwrap())
            .message(MessageText::new("  Hi  ").unwrap())
            .integration_id(0)
            .build();

        assert_eq!(message.sender().map(SenderId::as_str), Some("MYBRAND"));
        assert_eq!(message.to().len(), 2);
        assert_eq!(message.message().map(MessageText::as_str), Some("Hi"));
        assert_eq!(message.integration_id(), Some(IntegrationId::new(0)));
    }

    #[test]
    fn outbound_message_to_replaces_recipients() {
        let message = OutboundMessage::builder()
            .recipient(RawPhoneNumber::new("1").unwrap())
            .to(vec![RawPhoneNumber::new("2").unwrap()])
            .build();
        assert_eq!(message.to(), &[RawPhoneNumber::new("2").unwrap()]);
        assert!(message.sender().is_none());
        assert!(message.integration_id().is_none());
    }

    #[test]
    fn message_id_set_limit_is_enforced() {
        let sms_ids = (0..(GET_STATUS_MAX_SMS_IDS + 1))
            .map(|idx| SmsId::new(format!("{idx}")).unwrap())
            .collect::<Vec<_>>();
        let err = MessageIdSet::new(sms_ids).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooMany {
                max: GET_STATUS_MAX_SMS_IDS,
                actual: 101,
                ..
            }
        ));
    }

    #[test]
    fn message_id_set_allows_empty_and_clears() {
        let mut set = MessageIdSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());

        set = MessageIdSet::one(SmsId::new("42").unwrap());
        assert_eq!(set.len(), 1);
        set.clear();
        assert!(set.is_empty());
    }
}
