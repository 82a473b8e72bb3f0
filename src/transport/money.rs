use serde::Deserialize;

/// Money-like value returned by SMSClub as either JSON string or JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportMoney {
    String(String),
    Number(serde_json::Number),
}

impl TransportMoney {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_number() {
        let parsed: TransportMoney = serde_json::from_str(r#""10.50""#).unwrap();
        assert_eq!(parsed.into_string(), "10.50");

        let parsed: TransportMoney = serde_json::from_str("42").unwrap();
        assert_eq!(parsed.into_string(), "42");
    }

    #[test]
    fn rejects_other_json_types() {
        assert!(serde_json::from_str::<TransportMoney>("true").is_err());
        assert!(serde_json::from_str::<TransportMoney>("{}").is_err());
    }
}
