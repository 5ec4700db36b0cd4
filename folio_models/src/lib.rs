pub mod contact;
pub mod contact_log;
pub mod email_address;
pub mod sanitize;
