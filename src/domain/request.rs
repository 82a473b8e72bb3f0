use crate::domain::validation::ValidationError;
use crate::domain::value::{IntegrationId, MessageText, RawPhoneNumber, SenderId, SmsId};

pub const SEND_SMS_MAX_RECIPIENTS: usize = 100;
pub const GET_STATUS_MAX_SMS_IDS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A message ready to be passed to [`SmsClubClient::send`](crate::SmsClubClient::send).
///
/// Presence and limit checks happen when the message is sent, so a message can be built
/// incrementally. When no sender is set the client's default sender is used.
pub struct OutboundMessage {
    from: Option<SenderId>,
    to: Vec<RawPhoneNumber>,
    message: Option<MessageText>,
    integration_id: Option<IntegrationId>,
}

impl OutboundMessage {
    pub fn builder() -> OutboundMessageBuilder {
        OutboundMessageBuilder::default()
    }

    pub fn sender(&self) -> Option<&SenderId> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &[RawPhoneNumber] {
        &self.to
    }

    pub fn message(&self) -> Option<&MessageText> {
        self.message.as_ref()
    }

    pub fn integration_id(&self) -> Option<IntegrationId> {
        self.integration_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutboundMessageBuilder {
    inner: OutboundMessage,
}

impl OutboundMessageBuilder {
    /// Override the client's default sender for this message.
    pub fn sender(mut self, sender: SenderId) -> Self {
        self.inner.from = Some(sender);
        self
    }

    /// Replace the recipient list.
    pub fn to(mut self, recipients: impl IntoIterator<Item = RawPhoneNumber>) -> Self {
        self.inner.to = recipients.into_iter().collect();
        self
    }

    /// Append one recipient.
    pub fn recipient(mut self, recipient: RawPhoneNumber) -> Self {
        self.inner.to.push(recipient);
        self
    }

    pub fn message(mut self, message: MessageText) -> Self {
        self.inner.message = Some(message);
        self
    }

    /// Referral-program id; sent only when set.
    pub fn integration_id(mut self, integration_id: u64) -> Self {
        self.inner.integration_id = Some(IntegrationId::new(integration_id));
        self
    }

    pub fn build(self) -> OutboundMessage {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Message ids for a status lookup.
///
/// Invariant: at most [`GET_STATUS_MAX_SMS_IDS`] entries. May be empty.
pub struct MessageIdSet {
    ids: Vec<SmsId>,
}

impl MessageIdSet {
    pub fn new(ids: Vec<SmsId>) -> Result<Self, ValidationError> {
        if ids.len() > GET_STATUS_MAX_SMS_IDS {
            return Err(ValidationError::TooMany {
                field: SmsId::FIELD,
                max: GET_STATUS_MAX_SMS_IDS,
                actual: ids.len(),
            });
        }
        Ok(Self { ids })
    }

    pub fn one(id: SmsId) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[SmsId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
