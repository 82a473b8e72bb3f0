/// Per-client audit trail of every error returned by a public operation.
///
/// Entries accumulate for the lifetime of the client and are only removed by
/// [`ErrorLog::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    messages: Vec<String>,
    has_error: bool,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        self.has_error = true;
    }

    /// Whether any error has been recorded since creation or the last [`ErrorLog::clear`].
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Recorded messages, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.has_error = false;
    }
}
