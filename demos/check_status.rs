use std::io;

use smsclub::{SmsClubClient, SmsId, Token};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SMSCLUB_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_TOKEN environment variable is required",
        )
    })?;
    let sms_ids_raw = std::env::var("SMSCLUB_SMS_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_SMS_IDS environment variable is required (comma-separated ids)",
        )
    })?;

    let sms_ids = sms_ids_raw
        .split(',')
        .map(SmsId::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut client = SmsClubClient::new(Token::new(token)?);
    let response = client.get_status(sms_ids)?;

    for (id, status) in &response.statuses {
        let description = status
            .known()
            .map(|known| known.description())
            .unwrap_or("unknown status");
        println!("{}: {} ({description})", id.as_str(), status.as_str());
    }

    Ok(())
}
