use std::sync::LazyLock;

use crate::domain::validation::ValidationError;

use phonenumber::country;

static SENDER_ID_RE: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"^[A-Za-z0-9 ]{1,11}$").unwrap());

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSClub account token, sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct Token(String);

impl Token {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Alpha name a message is sent from (`src_addr`).
///
/// Invariant: after trimming, 1-11 characters of Latin letters, digits and spaces.
/// The name must also be registered in your SMSClub account.
pub struct SenderId(String);

impl SenderId {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "from";

    /// Maximum length of a sender id.
    pub const MAX_LEN: usize = 11;

    /// Create a validated [`SenderId`]. The trimmed value is stored.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if !SENDER_ID_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidSenderId { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: stored trimmed and non-empty.
pub struct MessageText(String);

impl MessageText {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by SMSClub on send, used for status lookups.
///
/// Invariant: non-empty after trimming.
pub struct SmsId(String);

impl SmsId {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "id_sms";

    /// Create a validated [`SmsId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sms id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Referral-program integration id (`integration_id`).
pub struct IntegrationId(u64);

impl IntegrationId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMSClub (`phone`).
///
/// Invariant: non-empty after trimming. This type does not normalize; to normalize, parse
/// into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMSClub.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// SMSClub expects international digits without the leading `+` (`380501234567`).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164.trim_start_matches('+').to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number normalized to E.164 through the `phonenumber` crate.
///
/// Converts into the digits-only [`RawPhoneNumber`] form SMSClub expects.
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, trimmed).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { e164 })
    }

    /// Normalized E.164 representation (`+380501234567`).
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery status string reported by `sms/status`.
///
/// The value is preserved as-is even when unknown to this crate.
pub struct DeliveryStatus(String);

impl DeliveryStatus {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Status string as returned by SMSClub.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this status to a known variant, if one exists.
    pub fn known(&self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Delivery statuses documented by SMSClub.
pub enum KnownDeliveryStatus {
    Enroute,
    Delivered,
    Expired,
    Undeliverable,
    Rejected,
}

impl KnownDeliveryStatus {
    /// Convert a raw status string (`DELIVRD`, ...) into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "ENROUTE" => Self::Enroute,
            "DELIVRD" => Self::Delivered,
            "EXPIRED" => Self::Expired,
            "UNDELIV" => Self::Undeliverable,
            "REJECTD" => Self::Rejected,
            _ => return None,
        })
    }

    /// Wire representation of the status.
    pub fn code(self) -> &'static str {
        match self {
            Self::Enroute => "ENROUTE",
            Self::Delivered => "DELIVRD",
            Self::Expired => "EXPIRED",
            Self::Undeliverable => "UNDELIV",
            Self::Rejected => "REJECTD",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Enroute => "Message sent.",
            Self::Delivered => "Message delivered.",
            Self::Expired => "Life expired, message not delivered.",
            Self::Undeliverable => "Unable to deliver message.",
            Self::Rejected => "The message was rejected by system (black list or other filters).",
        }
    }

    /// Whether the message will not change status anymore.
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Enroute)
    }
}
