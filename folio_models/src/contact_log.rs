use std::net::IpAddr;

use chrono::{DateTime, Utc};

use crate::contact::ContactMessage;

/// One line of the contact submission log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLogRecord {
    pub timestamp: DateTime<Utc>,
    pub client_ip: Option<IpAddr>,
    pub message: ContactMessage,
    pub status: ContactLogStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLogStatus {
    /// The owner notification was accepted by the mail server.
    Sent,
    /// The owner notification could not be delivered.
    Failed,
}

impl ContactLogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl ContactLogRecord {
    pub const PREVIEW_LENGTH: usize = 100;

    /// The first [`Self::PREVIEW_LENGTH`] characters of the message, followed
    /// by `...`.
    pub fn message_preview(&self) -> String {
        let mut preview = self
            .message
            .content
            .chars()
            .take(Self::PREVIEW_LENGTH)
            .collect::<String>();
        preview.push_str("...");
        preview
    }
}
