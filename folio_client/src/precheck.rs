use std::sync::LazyLock;

use folio_models::contact::ContactField;
use regex::Regex;

use crate::ContactFormFields;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Inline messages of the fields that failed [`precheck`], in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(ContactField, &'static str)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|&(_, message)| message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

/// Cheap checks that run before anything is sent. The handler validates again
/// with stricter rules; the subject is only checked there.
pub fn precheck(fields: &ContactFormFields) -> Result<(), FieldErrors> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push((ContactField::Name, "Name is required"));
    }

    if fields.email.trim().is_empty() {
        errors.push((ContactField::Email, "Email is required"));
    } else if !EMAIL_REGEX.is_match(&fields.email) {
        errors.push((ContactField::Email, "Please enter a valid email"));
    }

    if fields.message.trim().is_empty() {
        errors.push((ContactField::Message, "Message is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}
