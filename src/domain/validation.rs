use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingField { field: &'static str },
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidSenderId { input: String },
    InvalidPhoneNumber { input: String },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingField { field } => write!(f, "required field missing: {field}"),
            Self::TooMany { field, max, actual } => {
                write!(f, "too many {field} entries: {actual} (max {max})")
            }
            Self::InvalidSenderId { input } => write!(
                f,
                "invalid sender id format: {input:?} (1-11 Latin letters, digits or spaces)"
            ),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        let err = ValidationError::MissingField { field: "message" };
        assert_eq!(err.to_string(), "required field missing: message");

        let err = ValidationError::TooMany {
            field: "to",
            max: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "too many to entries: 3 (max 2)");

        let err = ValidationError::InvalidSenderId {
            input: "Brand!".to_owned(),
        };
        assert!(err.to_string().starts_with("invalid sender id format"));

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
