//! Typed, blocking Rust client for the SMSClub JSON HTTP API
//! (`https://im.smsclub.mobi/sms/`).
//!
//! The crate is split into a domain layer of validated types, a transport layer for
//! request bodies and the provider's response envelopes, and a client layer that issues
//! the requests.
//!
//! ```rust,no_run
//! use smsclub::{MessageText, OutboundMessage, RawPhoneNumber, SmsClubClient, Token};
//!
//! fn main() -> Result<(), smsclub::SmsClubError> {
//!     let mut client = SmsClubClient::new(Token::new("...")?);
//!     client.set_from("MYBRAND")?;
//!     let message = OutboundMessage::builder()
//!         .recipient(RawPhoneNumber::new("380501234567")?)
//!         .message(MessageText::new("hello")?)
//!         .build();
//!     let _resp = client.send(&message)?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiMethod, ClientConfig, ErrorLog, SmsClubClient, SmsClubClientBuilder, SmsClubError,
};
pub use domain::{
    BalanceResponse, DeliveryStatus, IntegrationId, KnownDeliveryStatus, MessageIdSet,
    MessageText, OriginatorResponse, OutboundMessage, OutboundMessageBuilder, PhoneNumber,
    RawPhoneNumber, SendSmsResponse, SenderId, SmsId, StatusResponse, Token, ValidationError,
};
pub use transport::{unwrap_info, unwrap_success_request};
