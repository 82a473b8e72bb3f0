//! Transport layer: wire-format details (request bodies, envelopes, response views).

mod account;
mod check_status;
mod envelope;
mod money;
mod send_sms;

pub use account::{decode_balance_response, decode_originator_response, encode_empty_body};
pub use check_status::{decode_status_response, encode_status_body};
pub use envelope::{unwrap_info, unwrap_success_request};
pub use send_sms::{decode_send_response, encode_send_body};
