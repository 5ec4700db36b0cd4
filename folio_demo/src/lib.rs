//! Fixtures shared by the tests of the other crates.

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::LazyLock,
};

use chrono::{DateTime, TimeZone, Utc};
use folio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};

pub const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2026, 10, 19, 13, 5, 0).unwrap());

/// How [`NOW`] appears in the owner notification.
pub const NOW_RECEIVED_AT: &str = "October 19, 2026, 1:05 pm";

pub static OWNER: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Site Owner <owner@example.com>".parse().unwrap());

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// A submission that passes every rule.
pub static VALID_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Jo".into(),
    email: "jo@x.com".into(),
    subject: "Hi!".into(),
    message: "This is a test message.".into(),
});

/// A submission that fails every rule.
pub static INVALID_SUBMISSION: LazyLock<ContactSubmission> =
    LazyLock::new(|| ContactSubmission {
        name: "J".into(),
        email: "bad".into(),
        subject: "".into(),
        message: "short".into(),
    });
