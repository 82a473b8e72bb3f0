use std::io;

use smsclub::{MessageText, OutboundMessage, RawPhoneNumber, SmsClubClient, Token};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SMSCLUB_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_TOKEN environment variable is required",
        )
    })?;
    let from = std::env::var("SMSCLUB_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_FROM environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("SMSCLUB_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSCLUB_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsclub demo.".to_owned());

    let mut client = SmsClubClient::new(Token::new(token)?);
    client.set_from(from)?;

    let request = OutboundMessage::builder()
        .recipient(RawPhoneNumber::new(phone_raw)?)
        .message(MessageText::new(message)?)
        .build();

    let response = client.send(&request)?;
    println!("sms: {:?}, raw: {}", response.sms, response.raw);

    Ok(())
}
