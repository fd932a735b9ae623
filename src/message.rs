//! Diagnostic messages attached to parsed inputs.

use serde::Serialize;
use std::fmt;

use crate::error::{ErrorCode, NoticeCode};

/// Severity of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    /// The input could not be fully understood; the record is invalid.
    Error,
    /// The input was understood but something was ignored or assumed.
    Warn,
    /// Informational only.
    Info,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "ERROR"),
            MessageKind::Warn => write!(f, "WARN"),
            MessageKind::Info => write!(f, "INFO"),
        }
    }
}

/// A single diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    kind: MessageKind,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl Message {
    /// Create an error message with free text.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            code: None,
        }
    }

    /// Create a warning message with free text.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warn,
            text: text.into(),
            code: None,
        }
    }

    /// Create an info message with free text.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
            code: None,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stable code (`E1001`, `W1002`, ...) if the message came from one.
    pub fn code(&self) -> Option<&'static str> {
        self.code
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<ErrorCode> for Message {
    fn from(code: ErrorCode) -> Self {
        Self {
            kind: MessageKind::Error,
            text: code.text().to_string(),
            code: Some(code.as_str()),
        }
    }
}

impl From<NoticeCode> for Message {
    fn from(code: NoticeCode) -> Self {
        let kind = if code.is_info() {
            MessageKind::Info
        } else {
            MessageKind::Warn
        };
        Self {
            kind,
            text: code.text().to_string(),
            code: Some(code.as_str()),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} [{}] {}", self.kind, code, self.text),
            None => write!(f, "{} {}", self.kind, self.text),
        }
    }
}

/// Accumulates messages while a grammar fills in a record.
///
/// Parsers push into this during construction; the finished list is moved into
/// the record and never touched again.
#[derive(Debug, Default)]
pub(crate) struct Messages(Vec<Message>);

impl Messages {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: impl Into<Message>) {
        self.0.push(message.into());
    }

    pub(crate) fn into_vec(self) -> Vec<Message> {
        self.0
    }
}
