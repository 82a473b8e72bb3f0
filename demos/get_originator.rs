use std::io;

use smsclub::{SmsClubClient, Token};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SMSCLUB_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCLUB_TOKEN environment variable is required",
        )
    })?;

    let mut client = SmsClubClient::new(Token::new(token)?);
    let response = client.get_originator()?;

    for name in &response.originators {
        println!("{name}");
    }

    Ok(())
}
